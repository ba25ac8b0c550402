use dioxus::prelude::*;

use crate::auth::{use_api, use_auth};

/// Top bar shown on every authenticated page: brand, the signed-in user's
/// name, and logout. Logging out clears the session; the router shell
/// picks up the resulting session event and redirects.
#[component]
pub fn Header(#[props(default = "VetDesk".to_string())] brand: String) -> Element {
    let api = use_api();
    let auth = use_auth();

    let on_logout = move |_| {
        api.auth.logout();
    };

    rsx! {
        header {
            class: "app-header",
            span { class: "app-header__brand", "{brand}" }
            div {
                class: "app-header__user",
                if let Some(user) = auth().user {
                    span { class: "app-header__name", "{user.name}" }
                }
                button {
                    class: "secondary",
                    onclick: on_logout,
                    "Sign out"
                }
            }
        }
    }
}
