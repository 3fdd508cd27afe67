use dioxus::prelude::*;

use crate::{Route, component::element::ErrorMessage};

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        ErrorMessage {
            message: "Page not found: /{path}",
            Link {
                class: "button is-danger mt-3",
                to: Route::Calculator {},
                "Go to calculator"
            }
        }
    }
}
