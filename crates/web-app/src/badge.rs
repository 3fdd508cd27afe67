use strum::Display;

use liftlevel_domain as domain;

/// Visual treatment of a strength level.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    #[strum(to_string = "light")]
    Light,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "danger")]
    Danger,
    #[strum(to_string = "dark")]
    Dark,
}

impl Badge {
    #[must_use]
    pub fn class(self) -> String {
        format!("tag is-medium is-{self}")
    }
}

impl From<&domain::StrengthLevel> for Badge {
    fn from(value: &domain::StrengthLevel) -> Self {
        match value {
            domain::StrengthLevel::Untrained => Badge::Light,
            domain::StrengthLevel::Tier(name) => match name.as_str() {
                "Beginner" => Badge::Warning,
                "Intermediate" => Badge::Primary,
                "Advanced" => Badge::Info,
                "Elite" => Badge::Success,
                _ => Badge::Dark,
            },
            domain::StrengthLevel::Freak => Badge::Danger,
            domain::StrengthLevel::InvalidInput => Badge::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(domain::StrengthLevel::Untrained, Badge::Light)]
    #[case(tier("Beginner"), Badge::Warning)]
    #[case(tier("Intermediate"), Badge::Primary)]
    #[case(tier("Advanced"), Badge::Info)]
    #[case(tier("Elite"), Badge::Success)]
    #[case(domain::StrengthLevel::Freak, Badge::Danger)]
    #[case(domain::StrengthLevel::InvalidInput, Badge::Dark)]
    #[case(tier("Novice"), Badge::Dark)]
    fn test_badge_from_strength_level(
        #[case] level: domain::StrengthLevel,
        #[case] expected: Badge,
    ) {
        assert_eq!(Badge::from(&level), expected);
    }

    #[test]
    fn test_badge_class() {
        assert_eq!(Badge::Success.class(), "tag is-medium is-success");
        assert_eq!(Badge::Light.class(), "tag is-medium is-light");
    }

    fn tier(name: &str) -> domain::StrengthLevel {
        domain::StrengthLevel::Tier(domain::TierName::new(name).unwrap())
    }
}
