use std::collections::BTreeMap;

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use liftlevel_domain::{self as domain, ThresholdTableService};
use liftlevel_web_app::badge::Badge;

use crate::{
    DOMAIN_SERVICE, THRESHOLD_TABLE,
    component::{
        element::{Block, Container, Error, ErrorMessage, Icon, Loading, Table, Title},
        form::{ButtonSelectField, ButtonSelectOption, NumberField},
    },
    load_threshold_table,
};

#[component]
pub fn Calculator() -> Element {
    let mut sex = use_signal(|| domain::Sex::MALE);
    let mut body_weight = use_signal(String::new);
    let mut one_rep_max = use_signal(|| {
        domain::Exercise::iter()
            .map(|exercise| (exercise, String::new()))
            .collect::<BTreeMap<_, _>>()
    });
    let measurement = use_memo(move || {
        let one_rep_max = one_rep_max.read();
        domain::Measurement::parse(
            sex(),
            &body_weight.read(),
            one_rep_max
                .iter()
                .map(|(exercise, value)| (*exercise, value.as_str())),
        )
    });

    rsx! {
        Container {
            ButtonSelectField {
                label: "Sex",
                options: vec![
                    ButtonSelectOption { text: "Male".to_string(), value: domain::Sex::MALE },
                    ButtonSelectOption { text: "Female".to_string(), value: domain::Sex::FEMALE },
                ],
                selected: sex(),
                onclick: move |(_, value): (_, domain::Sex)| {
                    *sex.write() = value;
                },
            }
            NumberField {
                label: "Body weight (lbs)",
                value: body_weight(),
                error: if measurement.read().body_weight.is_err() {
                    "Enter a valid body weight.".to_string()
                },
                oninput: move |event: FormEvent| {
                    *body_weight.write() = event.value();
                },
            }
            div {
                class: "columns",
                for exercise in domain::Exercise::iter() {
                    div {
                        class: "column",
                        NumberField {
                            label: format!("{exercise} 1RM (lbs)"),
                            value: one_rep_max.read().get(&exercise).cloned().unwrap_or_default(),
                            error: if matches!(measurement.read().one_rep_max.get(&exercise), Some(Err(_))) {
                                format!("Enter a valid {exercise} 1RM.")
                            },
                            oninput: move |event: FormEvent| {
                                one_rep_max.write().insert(exercise, event.value());
                            },
                        }
                    }
                }
            }
        }
        Results { measurement: measurement() }
    }
}

#[component]
fn Results(measurement: domain::Measurement) -> Element {
    let status = THRESHOLD_TABLE.read().clone();

    match status {
        domain::ThresholdTableStatus::Loaded(threshold_table) => {
            let result = DOMAIN_SERVICE
                .read()
                .classify_measurement(&threshold_table, &measurement);
            let body = result
                .iter()
                .map(|(exercise, level)| {
                    vec![
                        rsx! { span { class: "has-text-weight-bold", "{exercise}" } },
                        match level {
                            Ok(level) => rsx! {
                                span { class: Badge::from(level).class(), "{level}" }
                            },
                            Err(err) => rsx! {
                                Error { message: err.to_string() }
                            },
                        },
                        match ratio(&measurement, *exercise) {
                            Some(ratio) => rsx! { "{ratio:.2} × BW" },
                            None => rsx! {},
                        },
                    ]
                })
                .collect::<Vec<_>>();
            rsx! {
                Container {
                    Title { title: "Results" }
                    Table {
                        head: vec![rsx! { "Exercise" }, rsx! { "Level" }, rsx! { "Ratio" }],
                        body,
                    }
                }
            }
        }
        domain::ThresholdTableStatus::Unavailable(err) => rsx! {
            ErrorMessage {
                message: "Failed to load strength levels",
                Block { "{err}" }
                button {
                    class: "button is-danger",
                    onclick: move |_| async move {
                        load_threshold_table().await;
                    },
                    Icon { name: "arrow-rotate-right" }
                    span { "Retry" }
                }
            }
        },
        domain::ThresholdTableStatus::Pending => rsx! { Loading {} },
    }
}

fn ratio(measurement: &domain::Measurement, exercise: domain::Exercise) -> Option<f64> {
    match (
        measurement.body_weight,
        measurement.one_rep_max.get(&exercise),
    ) {
        (Ok(body_weight), Some(Ok(one_rep_max))) => {
            domain::ratio(body_weight.into(), (*one_rep_max).into())
        }
        _ => None,
    }
}
