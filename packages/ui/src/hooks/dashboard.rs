use api::{Api, Owner};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::debounce::use_debounced;
use crate::forms::OwnerDraft;
use crate::toast::{use_toasts, Toasts};

/// Milliseconds a search keystroke must settle before filtering runs.
const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Dashboard state: the owner list with debounced search filtering plus
/// the create/edit owner modal.
#[derive(Clone)]
pub struct Dashboard {
    api: Api,
    toasts: Toasts,
    pub owners: Signal<Vec<Owner>>,
    pub filtered: Signal<Vec<Owner>>,
    pub search: Signal<String>,
    pub loading: Signal<bool>,
    pub modal_open: Signal<bool>,
    pub editing: Signal<Option<Owner>>,
    pub draft: Signal<OwnerDraft>,
}

pub fn use_dashboard() -> Dashboard {
    let page = Dashboard {
        api: use_api(),
        toasts: use_toasts(),
        owners: use_signal(Vec::new),
        filtered: use_signal(Vec::new),
        search: use_signal(String::new),
        loading: use_signal(|| true),
        modal_open: use_signal(|| false),
        editing: use_signal(|| None),
        draft: use_signal(OwnerDraft::default),
    };

    // Initial load.
    {
        let page = page.clone();
        let _loader = use_resource(move || {
            let page = page.clone();
            async move { page.load().await }
        });
    }

    // Re-filter whenever the settled query or the loaded list changes.
    let query = use_debounced(page.search.into(), SEARCH_DEBOUNCE_MS);
    {
        let owners = page.owners;
        let mut filtered = page.filtered;
        use_effect(move || {
            filtered.set(filter_owners(&owners(), &query()));
        });
    }

    page
}

impl Dashboard {
    pub async fn load(mut self) {
        match self.api.owners.list().await {
            Ok(owners) => self.owners.set(owners),
            Err(err) => self.toasts.error(err.to_string()),
        }
        self.loading.set(false);
    }

    pub fn open_create(mut self) {
        self.editing.set(None);
        self.draft.set(OwnerDraft::default());
        self.modal_open.set(true);
    }

    pub fn open_edit(mut self, owner: &Owner) {
        self.draft.set(OwnerDraft::from_owner(owner));
        self.editing.set(Some(owner.clone()));
        self.modal_open.set(true);
    }

    pub fn close_modal(mut self) {
        self.modal_open.set(false);
    }

    /// Validate the draft and create or update depending on the editing
    /// target. The modal only closes on success; failures surface a toast
    /// and leave it open for correction.
    pub async fn submit(mut self) {
        let editing = self.editing.peek().clone();
        let result = match &editing {
            Some(owner) => {
                let update = match self.draft.peek().to_update() {
                    Ok(update) => update,
                    Err(err) => {
                        self.toasts.error(err.to_string());
                        return;
                    }
                };
                self.api
                    .owners
                    .update(&owner.id, &update)
                    .await
                    .map(|_| "Owner updated successfully!")
            }
            None => {
                let create = match self.draft.peek().to_create() {
                    Ok(create) => create,
                    Err(err) => {
                        self.toasts.error(err.to_string());
                        return;
                    }
                };
                self.api
                    .owners
                    .create(&create)
                    .await
                    .map(|_| "Owner added successfully!")
            }
        };

        match result {
            Ok(message) => {
                self.toasts.success(message);
                self.modal_open.set(false);
                self.load().await;
            }
            Err(err) => self.toasts.error(err.to_string()),
        }
    }
}

fn filter_owners(owners: &[Owner], query: &str) -> Vec<Owner> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return owners.to_vec();
    }
    owners
        .iter()
        .filter(|owner| {
            owner.name.to_lowercase().contains(&query)
                || owner.phone.contains(&query)
                || owner
                    .email
                    .as_deref()
                    .is_some_and(|email| email.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn owner(name: &str, phone: &str, email: Option<&str>) -> Owner {
        Owner {
            id: name.to_lowercase(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.map(str::to_string),
            street: None,
            number: None,
            complement: None,
            neighborhood: None,
            city: None,
            state: None,
            zip_code: None,
            user_id: "u1".to_string(),
            animals: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let owners = vec![owner("Ana", "11999990000", None)];
        assert_eq!(filter_owners(&owners, "  ").len(), 1);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let owners = vec![
            owner("Ana Souza", "11999990000", None),
            owner("Carlos", "11888880000", None),
        ];
        let hits = filter_owners(&owners, "ana");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ana Souza");
    }

    #[test]
    fn matches_phone_and_email() {
        let owners = vec![
            owner("Ana", "11999990000", Some("ana@pets.com")),
            owner("Carlos", "11888880000", Some("carlos@pets.com")),
        ];
        assert_eq!(filter_owners(&owners, "8888").len(), 1);
        assert_eq!(filter_owners(&owners, "CARLOS@").len(), 1);
    }
}
