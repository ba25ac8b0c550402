//! Animal page: the animal's details, its medical history (newest first),
//! and the add/edit record modal. Deleting the animal returns to its
//! owner's page.

use dioxus::prelude::*;
use ui::format::display_datetime;
use ui::hooks::animal::use_animal_page;
use ui::{use_auth, ConfirmDialog, Header, ModalOverlay};

use crate::Route;

#[component]
pub fn AnimalDetail(id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let id_signal = use_signal(|| id.clone());
    // The callback receives the deleted animal's own owner id, so the
    // navigation lands on the right owner even if another one is showing.
    let page = use_animal_page(
        id_signal.into(),
        EventHandler::new(move |owner_id: String| {
            nav.push(Route::OwnerDetail { id: owner_id });
        }),
    );

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let mut draft = page.draft;
    let loading = page.loading;
    let animal = page.animal;
    let records = page.records;
    let editing = page.editing;
    let modal_open = page.modal_open;
    let pending_delete = page.pending_delete;

    rsx! {
        div {
            class: "page",
            Header {}

            main {
                class: "container",
                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if let Some(animal) = animal() {
                    div {
                        class: "page-heading",
                        div {
                            h1 { "{animal.name}" }
                            p {
                                class: "page-heading__subtitle",
                                if let Some(breed) = &animal.breed {
                                    "{animal.species} · {breed}"
                                } else {
                                    "{animal.species}"
                                }
                            }
                        }
                        div {
                            class: "page-heading__actions",
                            button {
                                class: "secondary",
                                onclick: {
                                    let owner_id = animal.owner_id.clone();
                                    move |_| {
                                        nav.push(Route::OwnerDetail { id: owner_id.clone() });
                                    }
                                },
                                "Back to owner"
                            }
                            button {
                                class: "danger",
                                onclick: {
                                    let page = page.clone();
                                    move |_| page.clone().request_delete_animal()
                                },
                                "Delete animal"
                            }
                        }
                    }

                    div {
                        class: "page-heading",
                        h2 { "Medical records" }
                        button {
                            class: "primary",
                            onclick: {
                                let page = page.clone();
                                move |_| page.clone().open_create()
                            },
                            "Add record"
                        }
                    }

                    if records().is_empty() {
                        p { class: "empty-state", "No medical records yet." }
                    } else {
                        div {
                            class: "record-list",
                            for record in records() {
                                div {
                                    key: "{record.id}",
                                    class: "card",
                                    div {
                                        class: "card__body",
                                        onclick: {
                                            let id = record.id.clone();
                                            move |_| {
                                                nav.push(Route::RecordDetail { id: id.clone() });
                                            }
                                        },
                                        h3 { {display_datetime(&record.attended_at)} }
                                        p { "Weight: {record.weight}" }
                                        p { class: "card__muted", "{record.medications} · {record.dosage}" }
                                    }
                                    div {
                                        class: "card__actions",
                                        button {
                                            class: "secondary",
                                            onclick: {
                                                let page = page.clone();
                                                let record = record.clone();
                                                move |_| page.clone().open_edit(&record)
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "danger",
                                            onclick: {
                                                let page = page.clone();
                                                let record = record.clone();
                                                move |_| page.clone().request_delete_record(&record)
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    p { class: "empty-state", "Animal not found." }
                }
            }

            if modal_open() {
                ModalOverlay {
                    on_close: {
                        let page = page.clone();
                        move |_| page.clone().close_modal()
                    },
                    div {
                        class: "modal-form",
                        h2 {
                            if editing().is_some() { "Edit record" } else { "New record" }
                        }

                        label { "Attended at" }
                        input {
                            r#type: "datetime-local",
                            value: draft.read().attended_at.clone(),
                            oninput: move |evt: FormEvent| draft.write().attended_at = evt.value(),
                        }
                        label { "Weight" }
                        input {
                            placeholder: "4.2kg",
                            value: draft.read().weight.clone(),
                            oninput: move |evt: FormEvent| draft.write().weight = evt.value(),
                        }
                        label { "Medications" }
                        input {
                            value: draft.read().medications.clone(),
                            oninput: move |evt: FormEvent| draft.write().medications = evt.value(),
                        }
                        label { "Dosage" }
                        input {
                            value: draft.read().dosage.clone(),
                            oninput: move |evt: FormEvent| draft.write().dosage = evt.value(),
                        }
                        label { "Notes" }
                        textarea {
                            value: draft.read().notes.clone(),
                            oninput: move |evt: FormEvent| draft.write().notes = evt.value(),
                        }

                        div {
                            class: "form-actions",
                            button {
                                class: "secondary",
                                onclick: {
                                    let page = page.clone();
                                    move |_| page.clone().close_modal()
                                },
                                "Cancel"
                            }
                            button {
                                class: "primary",
                                onclick: {
                                    let page = page.clone();
                                    move |_| {
                                        spawn(page.clone().submit());
                                    }
                                },
                                "Save"
                            }
                        }
                    }
                }
            }

            if let Some(pending) = pending_delete() {
                ConfirmDialog {
                    message: pending.message(),
                    on_confirm: {
                        let page = page.clone();
                        move |_| {
                            spawn(page.clone().confirm_delete());
                        }
                    },
                    on_cancel: {
                        let page = page.clone();
                        move |_| page.clone().cancel_delete()
                    },
                }
            }
        }
    }
}
