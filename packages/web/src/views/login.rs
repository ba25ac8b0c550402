//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::hooks::use_login;
use ui::use_auth;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let form = use_login(EventHandler::new(move |_| {
        nav.push(Route::Dashboard {});
    }));

    // Already signed in: go straight to the dashboard.
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let mut email = form.email;
    let mut password = form.password;
    let loading = form.loading;
    let submit = form.clone();

    rsx! {
        div {
            class: "auth-page",
            h1 { "VetDesk" }
            p { class: "auth-page__subtitle", "Sign in to your account" }

            form {
                class: "auth-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    spawn(submit.clone().submit());
                },

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-page__footer",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
