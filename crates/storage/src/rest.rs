//! REST
//!
//! The threshold table is a static JSON resource served next to the web app. It is fetched once
//! and converted into the domain representation, which validates the data contract.

use std::collections::BTreeMap;

use gloo_net::http::{Request, Response};
use liftlevel_domain as domain;
use log::warn;
use serde::Deserialize;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    url: String,
    send_request: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_send_request(url, GlooNetSendRequest)
    }
}

impl<S: SendRequest> REST<S> {
    pub fn with_send_request(url: impl Into<String>, send_request: S) -> Self {
        Self {
            url: url.into(),
            send_request,
        }
    }

    async fn fetch<T>(&self, request: Request) -> Result<T, domain::ReadError>
    where
        T: 'static + for<'de> Deserialize<'de>,
    {
        match self.send_request.send_request(request).await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<T>().await {
                        Ok(data) => Ok(data),
                        Err(error) => Err(domain::ReadError::Other(
                            format!("deserialization failed: {error}").into(),
                        )),
                    }
                } else {
                    Err(domain::StorageError::Other(
                        format!("{} {}", response.status(), response.status_text()).into(),
                    )
                    .into())
                }
            }
            Err(_) => Err(domain::StorageError::NoConnection.into()),
        }
    }
}

impl<S: SendRequest> domain::ThresholdTableRepository for REST<S> {
    async fn read_threshold_table(&self) -> Result<domain::ThresholdTable, domain::ReadError> {
        let request = Request::get(&self.url)
            .build()
            .map_err(|err| domain::ReadError::Other(err.into()))?;
        let threshold_table: ThresholdTable = self.fetch(request).await?;
        Ok(domain::ThresholdTable::try_from(threshold_table)?)
    }
}

/// Wire format: exercise name, sex code and tier name mapped to the ratio threshold.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
#[serde(transparent)]
pub struct ThresholdTable(pub BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>>);

impl TryFrom<ThresholdTable> for domain::ThresholdTable {
    type Error = domain::ThresholdTableError;

    fn try_from(value: ThresholdTable) -> Result<Self, Self::Error> {
        let mut entries = vec![];

        for (exercise_name, sexes) in value.0 {
            let Ok(exercise) = domain::Exercise::try_from(exercise_name.as_str()) else {
                warn!("ignoring thresholds of unknown exercise {exercise_name:?}");
                continue;
            };
            for (sex_code, tiers) in sexes {
                let Ok(sex) = domain::Sex::try_from(sex_code.as_str()) else {
                    warn!("ignoring thresholds of {exercise} for unknown sex code {sex_code:?}");
                    continue;
                };
                let thresholds = tiers
                    .into_iter()
                    .map(|(name, value)| Ok((domain::TierName::new(&name)?, value)))
                    .collect::<Result<Vec<_>, domain::ThresholdError>>()
                    .and_then(domain::Thresholds::new)
                    .map_err(|source| domain::ThresholdTableError {
                        exercise,
                        sex,
                        source,
                    })?;
                entries.push((exercise, sex, thresholds));
            }
        }

        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
impl From<&domain::ThresholdTable> for ThresholdTable {
    fn from(value: &domain::ThresholdTable) -> Self {
        let mut table: BTreeMap<String, BTreeMap<String, BTreeMap<String, f64>>> = BTreeMap::new();
        for (exercise, sex, thresholds) in value.iter() {
            table.entry(exercise.to_string()).or_default().insert(
                sex.code().to_string(),
                thresholds
                    .iter()
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
            );
        }
        Self(table)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{THRESHOLD_TABLE, THRESHOLDS};

    use super::*;

    #[test]
    fn test_threshold_table_try_from() {
        assert_eq!(
            domain::ThresholdTable::try_from(ThresholdTable::from(&*THRESHOLD_TABLE)),
            Ok(THRESHOLD_TABLE.clone())
        );
    }

    #[test]
    fn test_threshold_table_deserialize() {
        let table: ThresholdTable = serde_json::from_value(json!({
            "Squat": {
                "M": { "Beginner": 1.0, "Intermediate": 1.5, "Advanced": 2.0, "Elite": 2.5 }
            }
        }))
        .unwrap();

        assert_eq!(
            domain::ThresholdTable::try_from(table)
                .unwrap()
                .thresholds(domain::Exercise::Squat, domain::Sex::MALE),
            Ok(&*THRESHOLDS)
        );
    }

    #[test]
    fn test_threshold_table_try_from_skips_unknown_keys() {
        let table: ThresholdTable = serde_json::from_value(json!({
            "Squat": {
                "M": { "Beginner": 1.0, "Intermediate": 1.5, "Advanced": 2.0, "Elite": 2.5 },
                "X": { "Beginner": 0.1 }
            },
            "Overhead Press": {
                "M": { "Beginner": 0.5 }
            }
        }))
        .unwrap();

        let table = domain::ThresholdTable::try_from(table).unwrap();

        assert_eq!(
            table.iter().map(|(e, s, _)| (e, s)).collect::<Vec<_>>(),
            vec![(domain::Exercise::Squat, domain::Sex::MALE)]
        );
    }

    #[rstest]
    #[case::empty(
        json!({ "Bench": { "F": {} } }),
        domain::Exercise::Bench,
        domain::Sex::FEMALE,
        domain::ThresholdError::Empty
    )]
    #[case::tie(
        json!({ "Deadlift": { "M": { "Beginner": 1.0, "Intermediate": 1.0 } } }),
        domain::Exercise::Deadlift,
        domain::Sex::MALE,
        domain::ThresholdError::Tie {
            lower: domain::TierName::new("Beginner").unwrap(),
            upper: domain::TierName::new("Intermediate").unwrap(),
            value: 1.0,
        }
    )]
    #[case::reserved_name(
        json!({ "Squat": { "F": { "Freak": 3.0 } } }),
        domain::Exercise::Squat,
        domain::Sex::FEMALE,
        domain::ThresholdError::InvalidTierName(
            domain::TierNameError::Reserved("Freak".to_string())
        )
    )]
    #[case::negative(
        json!({ "Squat": { "M": { "Beginner": -1.0 } } }),
        domain::Exercise::Squat,
        domain::Sex::MALE,
        domain::ThresholdError::InvalidValue {
            tier: domain::TierName::new("Beginner").unwrap(),
            value: -1.0,
        }
    )]
    fn test_threshold_table_try_from_invalid(
        #[case] value: serde_json::Value,
        #[case] exercise: domain::Exercise,
        #[case] sex: domain::Sex,
        #[case] source: domain::ThresholdError,
    ) {
        let table: ThresholdTable = serde_json::from_value(value).unwrap();

        assert_eq!(
            domain::ThresholdTable::try_from(table),
            Err(domain::ThresholdTableError {
                exercise,
                sex,
                source
            })
        );
    }

    #[test]
    fn test_threshold_table_deserialize_non_numeric() {
        assert!(
            serde_json::from_value::<ThresholdTable>(json!({
                "Squat": { "M": { "Beginner": "1.0" } }
            }))
            .is_err()
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use std::cell::RefCell;

        use liftlevel_domain::ThresholdTableRepository;
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::*;

        struct MockSendRequest {
            response: RefCell<Option<Result<Response, gloo_net::Error>>>,
        }

        impl SendRequest for MockSendRequest {
            async fn send_request(&self, _: Request) -> Result<Response, gloo_net::Error> {
                self.response.borrow_mut().take().unwrap_or_else(|| {
                    Err(gloo_net::Error::GlooError("no connection".to_string()))
                })
            }
        }

        fn rest_with_response(
            response: Option<Result<Response, gloo_net::Error>>,
        ) -> REST<MockSendRequest> {
            REST::with_send_request(
                "strength_levels.json",
                MockSendRequest {
                    response: RefCell::new(response),
                },
            )
        }

        #[wasm_bindgen_test]
        async fn test_read_threshold_table() {
            assert_eq!(
                rest_with_response(Some(
                    Response::builder()
                        .status(200)
                        .json(&ThresholdTable::from(&*THRESHOLD_TABLE)),
                ))
                .read_threshold_table()
                .await
                .unwrap(),
                THRESHOLD_TABLE.clone()
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_threshold_table_no_connection() {
            assert!(matches!(
                rest_with_response(None).read_threshold_table().await,
                Err(domain::ReadError::Storage(
                    domain::StorageError::NoConnection
                ))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_threshold_table_not_found() {
            assert!(matches!(
                rest_with_response(Some(
                    Response::builder()
                        .status(404)
                        .body::<Option<&str>>(None),
                ))
                .read_threshold_table()
                .await,
                Err(domain::ReadError::Storage(domain::StorageError::Other(_)))
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_threshold_table_invalid_json() {
            assert!(matches!(
                rest_with_response(Some(
                    Response::builder()
                        .status(200)
                        .body::<Option<&str>>(Some("not json")),
                ))
                .read_threshold_table()
                .await,
                Err(domain::ReadError::Other(err)) if err.to_string().starts_with("deserialization failed")
            ));
        }

        #[wasm_bindgen_test]
        async fn test_read_threshold_table_invalid_data() {
            assert!(matches!(
                rest_with_response(Some(Response::builder().status(200).json(&json!({
                    "Squat": { "M": { "Beginner": 1.0, "Elite": 1.0 } }
                }))))
                .read_threshold_table()
                .await,
                Err(domain::ReadError::InvalidData(domain::ThresholdTableError {
                    exercise: domain::Exercise::Squat,
                    sex: domain::Sex::MALE,
                    source: domain::ThresholdError::Tie { .. },
                }))
            ));
        }
    }
}
