use crate::{Exercise, Sex, ThresholdTableError};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    InvalidData(#[from] ThresholdTableError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// A requested combination of exercise and sex is absent from the loaded threshold table.
///
/// This is a defect of the threshold data, not of the user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("no thresholds defined for {exercise} ({sex})")]
    MissingThresholds { exercise: Exercise, sex: Sex },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ThresholdError;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            ReadError::from(StorageError::Other("foo".into())),
            ReadError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_read_error_from_threshold_table_error() {
        let error = ReadError::from(ThresholdTableError {
            exercise: Exercise::Squat,
            sex: Sex::MALE,
            source: ThresholdError::Empty,
        });
        assert!(matches!(error, ReadError::InvalidData(_)));
        assert_eq!(
            error.to_string(),
            "invalid thresholds for Squat (male): no thresholds given"
        );
    }

    #[test]
    fn test_classification_error_display() {
        assert_eq!(
            ClassificationError::MissingThresholds {
                exercise: Exercise::Deadlift,
                sex: Sex::FEMALE
            }
            .to_string(),
            "no thresholds defined for Deadlift (female)"
        );
    }
}
