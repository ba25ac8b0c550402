use api::SessionEvent;
use dioxus::prelude::*;

use ui::{AuthProvider, AuthState, ToastProvider};
use views::{AnimalDetail, Dashboard, Login, OwnerDetail, RecordDetail, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/owners/:id")]
        OwnerDetail { id: String },
        #[route("/animals/:id")]
        AnimalDetail { id: String },
        #[route("/records/:id")]
        RecordDetail { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Layout shell for every route. Subscribes to session lifecycle events:
/// when the session ends (expiry on a 401, or logout), it resets the auth
/// state and redirects to the login view. This is the only place that
/// reacts to session teardown; the data layer just emits the event.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();
    let mut auth = ui::use_auth();

    ui::use_session_events(move |event: SessionEvent| {
        auth.set(AuthState { user: None });
        match event {
            SessionEvent::Expired | SessionEvent::LoggedOut => {
                nav.push(Route::Login {});
            }
        }
    });

    rsx! {
        Outlet::<Route> {}
    }
}
