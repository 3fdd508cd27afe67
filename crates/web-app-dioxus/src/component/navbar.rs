use dioxus::prelude::*;

use crate::{Route, component::element::Icon};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let navigator = use_navigator();

    let page_title = match use_route::<Route>() {
        Route::Calculator {} => "Strength Level Calculator",
        Route::Log {} => "Log",
        Route::NotFound { .. } => "",
    };
    let go_up_target = match use_route::<Route>() {
        Route::Calculator {} => None,
        Route::Log {} | Route::NotFound { .. } => Some(Route::Calculator {}),
    };

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    a {
                        class: "navbar-item is-size-5",
                        class: if go_up_target.is_none() { "has-text-primary" },
                        onclick: {
                            let go_up_target = go_up_target.clone();
                            move |_| {
                                if let Some(go_up_target) = &go_up_target {
                                    navigator.push(go_up_target.clone());
                                }
                            }
                        },
                        Icon { name: "chevron-left" }
                    }
                    div { class: "navbar-item is-size-5", "{page_title}" }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::Calculator {});
                            },
                            Icon { name: "dumbbell", px: 5 }
                            "Calculator"
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                navigator.push(Route::Log {});
                            },
                            Icon { name: "list", px: 5 }
                            "Log"
                        }
                        div {
                            class: "navbar-item has-text-weight-normal is-size-7",
                            "v{VERSION}"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
