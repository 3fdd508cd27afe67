use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl Sex {
    /// Code used by the threshold data source.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Sex::FEMALE => "F",
            Sex::MALE => "M",
        }
    }
}

impl TryFrom<&str> for Sex {
    type Error = SexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "F" => Ok(Sex::FEMALE),
            "M" => Ok(Sex::MALE),
            _ => Err(SexError::Unknown(value.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SexError {
    #[error("Unknown sex code: {0:?}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("F", Ok(Sex::FEMALE))]
    #[case("M", Ok(Sex::MALE))]
    #[case("m", Err(SexError::Unknown("m".to_string())))]
    #[case("female", Err(SexError::Unknown("female".to_string())))]
    #[case("", Err(SexError::Unknown(String::new())))]
    fn test_sex_try_from(#[case] value: &str, #[case] expected: Result<Sex, SexError>) {
        assert_eq!(Sex::try_from(value), expected);
    }

    #[rstest]
    #[case(Sex::FEMALE)]
    #[case(Sex::MALE)]
    fn test_sex_code(#[case] sex: Sex) {
        assert_eq!(Sex::try_from(sex.code()), Ok(sex));
    }

    #[rstest]
    #[case(Sex::FEMALE, "female")]
    #[case(Sex::MALE, "male")]
    fn test_sex_display(#[case] sex: Sex, #[case] string: &str) {
        assert_eq!(sex.to_string(), string);
    }
}
