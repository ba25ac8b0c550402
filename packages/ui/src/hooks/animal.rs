use api::{Animal, Api, MedicalRecord};
use dioxus::prelude::*;
use futures_util::join;

use crate::auth::use_api;
use crate::forms::RecordDraft;
use crate::toast::{use_toasts, Toasts};

/// A delete waiting for the user's confirmation.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingDelete {
    /// The animal shown on this page. Confirming navigates back to its
    /// owner.
    Animal(Animal),
    /// One of the animal's records. Confirming reloads the page data.
    Record(MedicalRecord),
}

impl PendingDelete {
    pub fn message(&self) -> String {
        match self {
            PendingDelete::Animal(animal) => {
                format!("Delete animal \"{}\" and its history?", animal.name)
            }
            PendingDelete::Record(_) => "Delete this medical record?".to_string(),
        }
    }
}

/// Animal page state: the animal, its records (newest first), the record
/// modal, and pending delete confirmations.
#[derive(Clone)]
pub struct AnimalPage {
    api: Api,
    toasts: Toasts,
    id: ReadOnlySignal<String>,
    /// Fires with the deleted animal's own `owner_id` so the view can
    /// navigate to the right owner page.
    on_animal_deleted: EventHandler<String>,
    pub animal: Signal<Option<Animal>>,
    pub records: Signal<Vec<MedicalRecord>>,
    pub loading: Signal<bool>,
    pub modal_open: Signal<bool>,
    pub editing: Signal<Option<MedicalRecord>>,
    pub draft: Signal<RecordDraft>,
    pub pending_delete: Signal<Option<PendingDelete>>,
}

pub fn use_animal_page(
    id: ReadOnlySignal<String>,
    on_animal_deleted: EventHandler<String>,
) -> AnimalPage {
    let page = AnimalPage {
        api: use_api(),
        toasts: use_toasts(),
        id,
        on_animal_deleted,
        animal: use_signal(|| None),
        records: use_signal(Vec::new),
        loading: use_signal(|| true),
        modal_open: use_signal(|| false),
        editing: use_signal(|| None),
        draft: use_signal(RecordDraft::default),
        pending_delete: use_signal(|| None),
    };

    {
        let page = page.clone();
        let _loader = use_resource(move || {
            let page = page.clone();
            async move { page.load().await }
        });
    }

    page
}

impl AnimalPage {
    /// Fetch the animal and its records as one concurrent batch. Always
    /// clears `loading`, even on failure.
    pub async fn load(mut self) {
        let id = self.id.peek().clone();
        let (animal, records) = join!(
            self.api.animals.get(&id),
            self.api.records.list_by_animal(&id)
        );
        match (animal, records) {
            (Ok(animal), Ok(records)) => {
                self.animal.set(Some(animal));
                self.records.set(records);
            }
            (Err(err), _) | (_, Err(err)) => self.toasts.error(err.to_string()),
        }
        self.loading.set(false);
    }

    pub fn open_create(mut self) {
        self.editing.set(None);
        self.draft.set(RecordDraft::default());
        self.modal_open.set(true);
    }

    pub fn open_edit(mut self, record: &MedicalRecord) {
        self.draft.set(RecordDraft::from_record(record));
        self.editing.set(Some(record.clone()));
        self.modal_open.set(true);
    }

    pub fn close_modal(mut self) {
        self.modal_open.set(false);
    }

    /// Create or update the record in the modal. All record fields are
    /// required; the modal closes only on success.
    pub async fn submit(mut self) {
        let editing = self.editing.peek().clone();
        let result = match &editing {
            Some(record) => {
                let update = match self.draft.peek().to_update() {
                    Ok(update) => update,
                    Err(err) => {
                        self.toasts.error(err.to_string());
                        return;
                    }
                };
                self.api
                    .records
                    .update(&record.id, &update)
                    .await
                    .map(|_| "Record updated successfully!")
            }
            None => {
                let animal_id = self.id.peek().clone();
                let create = match self.draft.peek().to_create(&animal_id) {
                    Ok(create) => create,
                    Err(err) => {
                        self.toasts.error(err.to_string());
                        return;
                    }
                };
                self.api
                    .records
                    .create(&create)
                    .await
                    .map(|_| "Record added successfully!")
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

    pub fn request_delete_animal(mut self) {
        if let Some(animal) = self.animal.peek().clone() {
            self.pending_delete.set(Some(PendingDelete::Animal(animal)));
        }
    }

    pub fn request_delete_record(mut self, record: &MedicalRecord) {
        self.pending_delete
            .set(Some(PendingDelete::Record(record.clone())));
    }

    pub fn cancel_delete(mut self) {
        self.pending_delete.set(None);
    }

    /// Execute the confirmed delete. Deleting the animal itself hands the
    /// animal's own `owner_id` to the navigation callback, not whatever
    /// owner happens to be displayed elsewhere. Deleting a record reloads
    /// in place.
    pub async fn confirm_delete(mut self) {
        let Some(pending) = self.pending_delete.peek().clone() else {
            return;
        };
        self.pending_delete.set(None);

        match pending {
            PendingDelete::Animal(animal) => match self.api.animals.delete(&animal.id).await {
                Ok(()) => {
                    self.toasts.success("Animal deleted successfully!");
                    self.on_animal_deleted.call(animal.owner_id.clone());
                }
                Err(err) => self.toasts.error(err.to_string()),
            },
            PendingDelete::Record(record) => match self.api.records.delete(&record.id).await {
                Ok(()) => {
                    self.toasts.success("Record deleted successfully!");
                    self.load().await;
                }
                Err(err) => self.toasts.error(err.to_string()),
            },
        }
    }
}
