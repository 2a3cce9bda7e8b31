use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{DashboardView, DatasetView, LearningView, ProgressView, QuestionnaireView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/learning", LearningView)] Learning {},
        #[route("/questionnaire", QuestionnaireView)] Questionnaire {},
        #[route("/dataset", DatasetView)] Dataset {},
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Museum Admin" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Learning {}, "Learning" } }
                li { Link { to: Route::Questionnaire {}, "Questionnaire" } }
                li { Link { to: Route::Dataset {}, "Dataset" } }
                li { Link { to: Route::Progress {}, "Progress" } }
            }
        }
    }
}
