//! Registration page view.

use dioxus::prelude::*;
use ui::hooks::use_register;
use ui::use_auth;

use crate::Route;

/// Registration page component. A new account does not get a session;
/// after success the user is sent to the login page.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let form = use_register(EventHandler::new(move |_| {
        nav.push(Route::Login {});
    }));

    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let mut name = form.name;
    let mut email = form.email;
    let mut password = form.password;
    let mut confirm = form.confirm;
    let loading = form.loading;
    let submit = form.clone();

    rsx! {
        div {
            class: "auth-page",
            h1 { "VetDesk" }
            p { class: "auth-page__subtitle", "Create your account" }

            form {
                class: "auth-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    spawn(submit.clone().submit());
                },

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min. 8 characters, letters and digits)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-page__footer",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
