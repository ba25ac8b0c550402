use api::{Animal, Api, MedicalRecord};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::forms::RecordDraft;
use crate::toast::{use_toasts, Toasts};

/// Record page state: a single visit entry plus the animal it belongs to,
/// with an edit modal and delete confirmation.
#[derive(Clone)]
pub struct RecordPage {
    api: Api,
    toasts: Toasts,
    id: ReadOnlySignal<String>,
    /// Fires with the record's `animal_id` after a confirmed delete so the
    /// view can navigate back to the animal page.
    on_record_deleted: EventHandler<String>,
    pub record: Signal<Option<MedicalRecord>>,
    pub animal: Signal<Option<Animal>>,
    pub loading: Signal<bool>,
    pub modal_open: Signal<bool>,
    pub draft: Signal<RecordDraft>,
    pub confirming_delete: Signal<bool>,
}

pub fn use_record_page(
    id: ReadOnlySignal<String>,
    on_record_deleted: EventHandler<String>,
) -> RecordPage {
    let page = RecordPage {
        api: use_api(),
        toasts: use_toasts(),
        id,
        on_record_deleted,
        record: use_signal(|| None),
        animal: use_signal(|| None),
        loading: use_signal(|| true),
        modal_open: use_signal(|| false),
        draft: use_signal(RecordDraft::default),
        confirming_delete: use_signal(|| false),
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

impl RecordPage {
    /// The animal fetch depends on the record's `animal_id`, so this load
    /// is sequential rather than batched.
    pub async fn load(mut self) {
        let id = self.id.peek().clone();
        match self.api.records.get(&id).await {
            Ok(record) => match self.api.animals.get(&record.animal_id).await {
                Ok(animal) => {
                    self.record.set(Some(record));
                    self.animal.set(Some(animal));
                }
                Err(err) => self.toasts.error(err.to_string()),
            },
            Err(err) => self.toasts.error(err.to_string()),
        }
        self.loading.set(false);
    }

    pub fn open_edit(mut self) {
        if let Some(record) = self.record.peek().clone() {
            self.draft.set(RecordDraft::from_record(&record));
            self.modal_open.set(true);
        }
    }

    pub fn close_modal(mut self) {
        self.modal_open.set(false);
    }

    pub async fn submit(mut self) {
        let Some(record) = self.record.peek().clone() else {
            return;
        };
        let update = match self.draft.peek().to_update() {
            Ok(update) => update,
            Err(err) => {
                self.toasts.error(err.to_string());
                return;
            }
        };

        match self.api.records.update(&record.id, &update).await {
            Ok(_) => {
                self.toasts.success("Record updated successfully!");
                self.modal_open.set(false);
                self.load().await;
            }
            Err(err) => self.toasts.error(err.to_string()),
        }
    }

    pub fn request_delete(mut self) {
        self.confirming_delete.set(true);
    }

    pub fn cancel_delete(mut self) {
        self.confirming_delete.set(false);
    }

    pub async fn confirm_delete(mut self) {
        self.confirming_delete.set(false);
        let Some(record) = self.record.peek().clone() else {
            return;
        };

        match self.api.records.delete(&record.id).await {
            Ok(()) => {
                self.toasts.success("Record deleted successfully!");
                self.on_record_deleted.call(record.animal_id.clone());
            }
            Err(err) => self.toasts.error(err.to_string()),
        }
    }
}
