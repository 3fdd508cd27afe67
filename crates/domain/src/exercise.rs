use strum::{Display, EnumIter};

#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Exercise {
    Squat,
    Bench,
    Deadlift,
}

impl TryFrom<&str> for Exercise {
    type Error = ExerciseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Squat" => Ok(Exercise::Squat),
            "Bench" => Ok(Exercise::Bench),
            "Deadlift" => Ok(Exercise::Deadlift),
            _ => Err(ExerciseError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error("Unknown exercise: {0:?}")]
    Unknown(String),
}
