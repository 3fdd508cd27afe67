use dioxus::prelude::*;

use liftlevel_web_app::log::Service;

use crate::{
    WEB_APP_SERVICE,
    component::element::{Color, Container, Error, Message, NoData, Title},
};

#[component]
pub fn Log() -> Element {
    let entries = WEB_APP_SERVICE.read().get_log_entries();
    rsx! {
        Title { title: "Log" }
        Container {
            match entries {
                Ok(entries) if entries.is_empty() => rsx! {
                    NoData {}
                },
                Ok(entries) => rsx! {
                    for entry in entries {
                        Message {
                            color: match entry.level {
                                log::Level::Error => Color::Danger,
                                log::Level::Warn => Color::Warning,
                                log::Level::Info => Color::Primary,
                                log::Level::Debug => Color::Info,
                                log::Level::Trace => Color::Dark,
                            },
                            p { class: "is-size-7", {entry.time} }
                            p { "{entry.message}" }
                        }
                    }
                },
                Err(err) => rsx! {
                    Error { message: err.to_string() }
                },
            }
        }
    }
}
