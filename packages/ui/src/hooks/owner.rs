use api::{Animal, Api, Owner};
use dioxus::prelude::*;
use futures_util::join;

use crate::auth::use_api;
use crate::forms::{AnimalDraft, OwnerDraft};
use crate::toast::{use_toasts, Toasts};

/// A delete waiting for the user's confirmation.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingDelete {
    /// The owner shown on this page. Confirming navigates away.
    Owner(Owner),
    /// One of the owner's animals. Confirming reloads the page data.
    Animal(Animal),
}

impl PendingDelete {
    pub fn message(&self) -> String {
        match self {
            PendingDelete::Owner(owner) => format!(
                "Delete owner \"{}\"? All their animals stay on the backend but will no longer be reachable from here.",
                owner.name
            ),
            PendingDelete::Animal(animal) => {
                format!("Delete animal \"{}\"?", animal.name)
            }
        }
    }
}

/// Owner page state: the owner, their animals, the animal modal, the
/// inline contact editor, and pending delete confirmations.
#[derive(Clone)]
pub struct OwnerPage {
    api: Api,
    toasts: Toasts,
    id: ReadOnlySignal<String>,
    on_owner_deleted: EventHandler<()>,
    pub owner: Signal<Option<Owner>>,
    pub animals: Signal<Vec<Animal>>,
    pub loading: Signal<bool>,
    pub modal_open: Signal<bool>,
    pub editing: Signal<Option<Animal>>,
    pub draft: Signal<AnimalDraft>,
    /// `Some` while the inline contact editor is open.
    pub owner_draft: Signal<Option<OwnerDraft>>,
    pub pending_delete: Signal<Option<PendingDelete>>,
}

pub fn use_owner_page(
    id: ReadOnlySignal<String>,
    on_owner_deleted: EventHandler<()>,
) -> OwnerPage {
    let page = OwnerPage {
        api: use_api(),
        toasts: use_toasts(),
        id,
        on_owner_deleted,
        owner: use_signal(|| None),
        animals: use_signal(Vec::new),
        loading: use_signal(|| true),
        modal_open: use_signal(|| false),
        editing: use_signal(|| None),
        draft: use_signal(AnimalDraft::default),
        owner_draft: use_signal(|| None),
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

impl OwnerPage {
    /// Fetch the owner and their animals as one concurrent batch. Always
    /// clears `loading`, even on failure, so the page never hangs.
    pub async fn load(mut self) {
        let id = self.id.peek().clone();
        let (owner, animals) = join!(
            self.api.owners.get(&id),
            self.api.animals.list_by_owner(&id)
        );
        match (owner, animals) {
            (Ok(owner), Ok(animals)) => {
                self.owner.set(Some(owner));
                self.animals.set(animals);
            }
            (Err(err), _) | (_, Err(err)) => self.toasts.error(err.to_string()),
        }
        self.loading.set(false);
    }

    pub fn open_create(mut self) {
        self.editing.set(None);
        self.draft.set(AnimalDraft::default());
        self.modal_open.set(true);
    }

    pub fn open_edit(mut self, animal: &Animal) {
        self.draft.set(AnimalDraft::from_animal(animal));
        self.editing.set(Some(animal.clone()));
        self.modal_open.set(true);
    }

    pub fn close_modal(mut self) {
        self.modal_open.set(false);
    }

    /// Create or update the animal in the modal. The modal closes only on
    /// success; validation and request failures leave it open.
    pub async fn submit(mut self) {
        let editing = self.editing.peek().clone();
        let result = match &editing {
            Some(animal) => {
                let update = match self.draft.peek().to_update() {
                    Ok(update) => update,
                    Err(err) => {
                        self.toasts.error(err.to_string());
                        return;
                    }
                };
                self.api
                    .animals
                    .update(&animal.id, &update)
                    .await
                    .map(|_| "Animal updated successfully!")
            }
            None => {
                let owner_id = self.id.peek().clone();
                let create = match self.draft.peek().to_create(&owner_id) {
                    Ok(create) => create,
                    Err(err) => {
                        self.toasts.error(err.to_string());
                        return;
                    }
                };
                self.api
                    .animals
                    .create(&create)
                    .await
                    .map(|_| "Animal added successfully!")
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

    pub fn request_delete_owner(mut self) {
        if let Some(owner) = self.owner.peek().clone() {
            self.pending_delete.set(Some(PendingDelete::Owner(owner)));
        }
    }

    pub fn request_delete_animal(mut self, animal: &Animal) {
        self.pending_delete
            .set(Some(PendingDelete::Animal(animal.clone())));
    }

    pub fn cancel_delete(mut self) {
        self.pending_delete.set(None);
    }

    /// Execute the confirmed delete. Deleting the owner navigates away via
    /// `on_owner_deleted`; deleting an animal reloads the list in place.
    pub async fn confirm_delete(mut self) {
        let Some(pending) = self.pending_delete.peek().clone() else {
            return;
        };
        self.pending_delete.set(None);

        match pending {
            PendingDelete::Owner(owner) => match self.api.owners.delete(&owner.id).await {
                Ok(()) => {
                    self.toasts.success("Owner deleted successfully!");
                    self.on_owner_deleted.call(());
                }
                Err(err) => self.toasts.error(err.to_string()),
            },
            PendingDelete::Animal(animal) => match self.api.animals.delete(&animal.id).await {
                Ok(()) => {
                    self.toasts.success("Animal deleted successfully!");
                    self.load().await;
                }
                Err(err) => self.toasts.error(err.to_string()),
            },
        }
    }

    /// Snapshot the persisted owner into the inline contact editor.
    pub fn start_edit_owner(mut self) {
        if let Some(owner) = self.owner.peek().clone() {
            self.owner_draft.set(Some(OwnerDraft::from_owner(&owner)));
        }
    }

    /// Discard the inline draft; the persisted owner stays as shown.
    pub fn cancel_edit_owner(mut self) {
        self.owner_draft.set(None);
    }

    /// Submit only the contact subset of fields, then reload.
    pub async fn save_owner(mut self) {
        let Some(owner) = self.owner.peek().clone() else {
            return;
        };
        let Some(draft) = self.owner_draft.peek().clone() else {
            return;
        };
        let update = match draft.to_contact_update() {
            Ok(update) => update,
            Err(err) => {
                self.toasts.error(err.to_string());
                return;
            }
        };

        self.loading.set(true);
        match self.api.owners.update(&owner.id, &update).await {
            Ok(_) => {
                self.owner_draft.set(None);
                self.toasts.success("Owner updated successfully!");
                self.load().await;
            }
            Err(err) => {
                self.loading.set(false);
                self.toasts.error(err.to_string());
            }
        }
    }
}
