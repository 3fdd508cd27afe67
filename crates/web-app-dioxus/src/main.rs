#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{Arc, LazyLock};

use dioxus::prelude::*;
use log::{error, info};

use liftlevel_domain::{self as domain, ThresholdTableService};
use liftlevel_storage as storage;
use liftlevel_web_app as web_app;

use component::navbar::Navbar;
use page::{calculator::Calculator, log::Log, not_found::NotFound};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Calculator {},
    #[route("/log")]
    Log {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const STRENGTH_LEVELS: Asset = asset!("/assets/strength_levels.json");

static LOG_ENTRIES: LazyLock<Arc<storage::memory::Log>> =
    LazyLock::new(|| Arc::new(storage::memory::Log::new()));

static DOMAIN_SERVICE: GlobalSignal<
    domain::Service<storage::rest::REST<storage::rest::GlooNetSendRequest>>,
> = Signal::global(|| {
    domain::Service::new(storage::rest::REST::new(STRENGTH_LEVELS.to_string()))
});
static WEB_APP_SERVICE: GlobalSignal<web_app::Service<Arc<storage::memory::Log>>> =
    Signal::global(|| web_app::Service::new(LOG_ENTRIES.clone()));
static THRESHOLD_TABLE: GlobalSignal<domain::ThresholdTableStatus> =
    Signal::global(domain::ThresholdTableStatus::default);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(LOG_ENTRIES.clone());
}

async fn load_threshold_table() {
    *THRESHOLD_TABLE.write() = domain::ThresholdTableStatus::Pending;
    let result = DOMAIN_SERVICE.read().get_threshold_table().await;
    if result.is_ok() {
        info!("threshold table loaded");
    }
    *THRESHOLD_TABLE.write() = result.into();
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the calculator cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    use_future(load_threshold_table);

    rsx! {
        document::Title { "Liftlevel" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {}
        }
    }
}
