use std::{collections::BTreeMap, fmt};

use strum::IntoEnumIterator;

use crate::{
    ClassificationError, Exercise, Sex, ThresholdTable, Thresholds, TierName, Weight, WeightError,
};

/// Label assigned to a lift.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    /// Ratio below the lowest threshold.
    Untrained,
    Tier(TierName),
    /// Ratio at or above the highest threshold.
    Freak,
    InvalidInput,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrengthLevel::Untrained => write!(f, "Untrained"),
            StrengthLevel::Tier(name) => write!(f, "{name}"),
            StrengthLevel::Freak => write!(f, "Freak"),
            StrengthLevel::InvalidInput => write!(f, "Invalid Input"),
        }
    }
}

pub type ClassificationResult = BTreeMap<Exercise, Result<StrengthLevel, ClassificationError>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub sex: Sex,
    pub body_weight: Result<Weight, WeightError>,
    pub one_rep_max: BTreeMap<Exercise, Result<Weight, WeightError>>,
}

impl Measurement {
    /// Builds a measurement from raw form input. Exercises without input are treated as empty.
    #[must_use]
    pub fn parse<'a>(
        sex: Sex,
        body_weight: &str,
        one_rep_max: impl IntoIterator<Item = (Exercise, &'a str)>,
    ) -> Self {
        let mut one_rep_max = one_rep_max
            .into_iter()
            .map(|(exercise, value)| (exercise, Weight::try_from(value)))
            .collect::<BTreeMap<_, _>>();
        for exercise in Exercise::iter() {
            one_rep_max
                .entry(exercise)
                .or_insert(Err(WeightError::Empty));
        }
        Self {
            sex,
            body_weight: Weight::try_from(body_weight),
            one_rep_max,
        }
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self::parse(Sex::MALE, "", [])
    }
}

/// Ratio of lifted weight to body weight, if both weights are finite and positive.
#[must_use]
pub fn ratio(body_weight: f64, one_rep_max: f64) -> Option<f64> {
    if is_valid_weight(body_weight) && is_valid_weight(one_rep_max) {
        Some(one_rep_max / body_weight)
    } else {
        None
    }
}

fn is_valid_weight(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Determines the strength level of a single lift.
///
/// Invalid weights yield [`StrengthLevel::InvalidInput`] without consulting the threshold table.
/// A missing table entry for the exercise and sex is reported as an error.
pub fn classify(
    threshold_table: &ThresholdTable,
    sex: Sex,
    exercise: Exercise,
    body_weight: f64,
    one_rep_max: f64,
) -> Result<StrengthLevel, ClassificationError> {
    let Some(ratio) = ratio(body_weight, one_rep_max) else {
        return Ok(StrengthLevel::InvalidInput);
    };
    Ok(level(threshold_table.thresholds(exercise, sex)?, ratio))
}

/// Maps a ratio onto the sorted thresholds.
///
/// The lowest tier includes its own threshold. Every other tier owns the interval from the
/// threshold below it (exclusive) up to its own threshold (inclusive). Reaching the highest
/// threshold already counts as [`StrengthLevel::Freak`]. A NaN ratio yields
/// [`StrengthLevel::InvalidInput`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn level(thresholds: &Thresholds, ratio: f64) -> StrengthLevel {
    let (lowest_tier, lowest) = thresholds.lowest();
    let (_, highest) = thresholds.highest();

    if ratio < lowest {
        StrengthLevel::Untrained
    } else if ratio == lowest {
        StrengthLevel::Tier(lowest_tier.clone())
    } else if ratio >= highest {
        StrengthLevel::Freak
    } else {
        thresholds
            .iter()
            .zip(thresholds.iter().skip(1))
            .find(|((_, prev), (_, threshold))| *prev < ratio && ratio <= *threshold)
            .map_or(StrengthLevel::InvalidInput, |(_, (name, _))| {
                StrengthLevel::Tier(name.clone())
            })
    }
}

/// Classifies every exercise of a measurement independently.
#[must_use]
pub fn classify_measurement(
    threshold_table: &ThresholdTable,
    measurement: &Measurement,
) -> ClassificationResult {
    Exercise::iter()
        .map(|exercise| {
            let level = match (
                measurement.body_weight,
                measurement.one_rep_max.get(&exercise),
            ) {
                (Ok(body_weight), Some(Ok(one_rep_max))) => classify(
                    threshold_table,
                    measurement.sex,
                    exercise,
                    body_weight.into(),
                    (*one_rep_max).into(),
                ),
                _ => Ok(StrengthLevel::InvalidInput),
            };
            (exercise, level)
        })
        .collect()
}
