use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use derive_more::{AsRef, Display};
use log::error;
use strum::IntoEnumIterator;

use crate::{
    ClassificationError, ClassificationResult, Exercise, Measurement, ReadError, Sex,
    classify_measurement,
};

#[allow(async_fn_in_trait)]
pub trait ThresholdTableService {
    async fn get_threshold_table(&self) -> Result<ThresholdTable, ReadError>;

    fn classify_measurement(
        &self,
        threshold_table: &ThresholdTable,
        measurement: &Measurement,
    ) -> ClassificationResult {
        let result = classify_measurement(threshold_table, measurement);
        for (exercise, level) in &result {
            if let Err(err) = level {
                error!("failed to classify {exercise}: {err}");
            }
        }
        result
    }
}

#[allow(async_fn_in_trait)]
pub trait ThresholdTableRepository {
    async fn read_threshold_table(&self) -> Result<ThresholdTable, ReadError>;
}

/// Availability of the threshold table.
///
/// Classification is only possible after the table has been loaded successfully.
#[derive(Debug, Clone, Default)]
pub enum ThresholdTableStatus {
    #[default]
    Pending,
    Loaded(Arc<ThresholdTable>),
    Unavailable(String),
}

impl From<Result<ThresholdTable, ReadError>> for ThresholdTableStatus {
    fn from(value: Result<ThresholdTable, ReadError>) -> Self {
        match value {
            Ok(threshold_table) => ThresholdTableStatus::Loaded(Arc::new(threshold_table)),
            Err(err) => ThresholdTableStatus::Unavailable(err.to_string()),
        }
    }
}

/// Ratio thresholds per exercise and sex.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ThresholdTable(BTreeMap<Exercise, BTreeMap<Sex, Thresholds>>);

impl ThresholdTable {
    pub fn thresholds(
        &self,
        exercise: Exercise,
        sex: Sex,
    ) -> Result<&Thresholds, ClassificationError> {
        self.0
            .get(&exercise)
            .and_then(|thresholds| thresholds.get(&sex))
            .ok_or(ClassificationError::MissingThresholds { exercise, sex })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Exercise, Sex, &Thresholds)> {
        self.0.iter().flat_map(|(exercise, thresholds)| {
            thresholds
                .iter()
                .map(|(sex, thresholds)| (*exercise, *sex, thresholds))
        })
    }

    /// Combinations of exercise and sex for which no thresholds are defined.
    #[must_use]
    pub fn missing(&self) -> Vec<(Exercise, Sex)> {
        Exercise::iter()
            .flat_map(|exercise| [Sex::FEMALE, Sex::MALE].map(|sex| (exercise, sex)))
            .filter(|(exercise, sex)| self.thresholds(*exercise, *sex).is_err())
            .collect()
    }
}

impl FromIterator<(Exercise, Sex, Thresholds)> for ThresholdTable {
    fn from_iter<I: IntoIterator<Item = (Exercise, Sex, Thresholds)>>(iter: I) -> Self {
        let mut table: BTreeMap<Exercise, BTreeMap<Sex, Thresholds>> = BTreeMap::new();
        for (exercise, sex, thresholds) in iter {
            table.entry(exercise).or_default().insert(sex, thresholds);
        }
        Self(table)
    }
}

/// Named tiers of one exercise and sex, sorted ascending by threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds(Vec<(TierName, f64)>);

impl Thresholds {
    #[allow(clippy::float_cmp)]
    pub fn new(thresholds: impl IntoIterator<Item = (TierName, f64)>) -> Result<Self, ThresholdError> {
        let mut thresholds = thresholds.into_iter().collect::<Vec<_>>();

        if thresholds.is_empty() {
            return Err(ThresholdError::Empty);
        }

        let mut names = HashSet::new();
        for (name, value) in &thresholds {
            if !value.is_finite() || *value < 0.0 {
                return Err(ThresholdError::InvalidValue {
                    tier: name.clone(),
                    value: *value,
                });
            }
            if !names.insert(name) {
                return Err(ThresholdError::DuplicateTier(name.clone()));
            }
        }

        thresholds.sort_by(|a, b| a.1.total_cmp(&b.1));

        for pair in thresholds.windows(2) {
            if pair[0].1 == pair[1].1 {
                return Err(ThresholdError::Tie {
                    lower: pair[0].0.clone(),
                    upper: pair[1].0.clone(),
                    value: pair[0].1,
                });
            }
        }

        Ok(Self(thresholds))
    }

    #[must_use]
    pub fn lowest(&self) -> (&TierName, f64) {
        let (name, value) = &self.0[0];
        (name, *value)
    }

    #[must_use]
    pub fn highest(&self) -> (&TierName, f64) {
        let (name, value) = &self.0[self.0.len() - 1];
        (name, *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TierName, f64)> {
        self.0.iter().map(|(name, value)| (name, *value))
    }

}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ThresholdError {
    #[error("no thresholds given")]
    Empty,
    #[error("threshold of {tier} must be a finite non-negative number ({value})")]
    InvalidValue { tier: TierName, value: f64 },
    #[error("tier {0} defined more than once")]
    DuplicateTier(TierName),
    #[error("tiers {lower} and {upper} share the threshold {value}")]
    Tie {
        lower: TierName,
        upper: TierName,
        value: f64,
    },
    #[error(transparent)]
    InvalidTierName(#[from] TierNameError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("invalid thresholds for {exercise} ({sex}): {source}")]
pub struct ThresholdTableError {
    pub exercise: Exercise,
    pub sex: Sex,
    pub source: ThresholdError,
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TierName(String);

impl TierName {
    /// Labels that are produced by the classifier itself and cannot name a tier.
    pub const RESERVED: [&'static str; 3] = ["Untrained", "Freak", "Invalid Input"];

    pub fn new(name: &str) -> Result<Self, TierNameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(TierNameError::Empty);
        }

        if Self::RESERVED.contains(&trimmed_name) {
            return Err(TierNameError::Reserved(trimmed_name.to_string()));
        }

        Ok(TierName(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TierNameError {
    #[error("Tier name must not be empty")]
    Empty,
    #[error("Tier name {0:?} is reserved")]
    Reserved(String),
}
