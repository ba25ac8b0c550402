use api::{Api, NewUser};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::toast::{use_toasts, Toasts};

/// Registration form state. Registration never establishes a session;
/// `on_registered` fires so the view can send the user to the login page.
#[derive(Clone)]
pub struct RegisterForm {
    api: Api,
    toasts: Toasts,
    on_registered: EventHandler<()>,
    pub name: Signal<String>,
    pub email: Signal<String>,
    pub password: Signal<String>,
    pub confirm: Signal<String>,
    pub loading: Signal<bool>,
}

pub fn use_register(on_registered: EventHandler<()>) -> RegisterForm {
    RegisterForm {
        api: use_api(),
        toasts: use_toasts(),
        on_registered,
        name: use_signal(String::new),
        email: use_signal(String::new),
        password: use_signal(String::new),
        confirm: use_signal(String::new),
        loading: use_signal(|| false),
    }
}

impl RegisterForm {
    pub async fn submit(mut self) {
        if let Err(err) = api::validate::password_match(&self.password.peek(), &self.confirm.peek())
        {
            self.toasts.error(err.to_string());
            return;
        }
        let data = NewUser {
            name: self.name.peek().trim().to_string(),
            email: self.email.peek().trim().to_string(),
            password: self.password.peek().clone(),
        };
        if let Err(err) = data.validate() {
            self.toasts.error(err.to_string());
            return;
        }

        self.loading.set(true);
        match self.api.auth.register(&data).await {
            Ok(_) => {
                self.toasts
                    .success("Account created! Sign in to continue.");
                self.on_registered.call(());
            }
            Err(err) => {
                self.loading.set(false);
                self.toasts.error(err.to_string());
            }
        }
    }
}
