//! Record page: one visit entry in full, with edit and delete.

use dioxus::prelude::*;
use ui::format::display_datetime;
use ui::hooks::record::use_record_page;
use ui::{use_auth, ConfirmDialog, Header, ModalOverlay};

use crate::Route;

#[component]
pub fn RecordDetail(id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let id_signal = use_signal(|| id.clone());
    let page = use_record_page(
        id_signal.into(),
        EventHandler::new(move |animal_id: String| {
            nav.push(Route::AnimalDetail { id: animal_id });
        }),
    );

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let mut draft = page.draft;
    let loading = page.loading;
    let record = page.record;
    let animal = page.animal;
    let modal_open = page.modal_open;
    let confirming_delete = page.confirming_delete;

    rsx! {
        div {
            class: "page",
            Header {}

            main {
                class: "container",
                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if let Some(record) = record() {
                    div {
                        class: "page-heading",
                        div {
                            h1 {
                                "Visit on "
                                {display_datetime(&record.attended_at)}
                            }
                            if let Some(animal) = animal() {
                                p { class: "page-heading__subtitle", "Patient: {animal.name}" }
                            }
                        }
                        div {
                            class: "page-heading__actions",
                            button {
                                class: "secondary",
                                onclick: {
                                    let animal_id = record.animal_id.clone();
                                    move |_| {
                                        nav.push(Route::AnimalDetail { id: animal_id.clone() });
                                    }
                                },
                                "Back to animal"
                            }
                            button {
                                class: "secondary",
                                onclick: {
                                    let page = page.clone();
                                    move |_| page.clone().open_edit()
                                },
                                "Edit"
                            }
                            button {
                                class: "danger",
                                onclick: {
                                    let page = page.clone();
                                    move |_| page.clone().request_delete()
                                },
                                "Delete"
                            }
                        }
                    }

                    div {
                        class: "detail-list",
                        div { class: "detail-list__row",
                            span { class: "detail-list__label", "Weight" }
                            span { "{record.weight}" }
                        }
                        div { class: "detail-list__row",
                            span { class: "detail-list__label", "Medications" }
                            span { "{record.medications}" }
                        }
                        div { class: "detail-list__row",
                            span { class: "detail-list__label", "Dosage" }
                            span { "{record.dosage}" }
                        }
                        div { class: "detail-list__row",
                            span { class: "detail-list__label", "Notes" }
                            span { "{record.notes}" }
                        }
                    }
                } else {
                    p { class: "empty-state", "Record not found." }
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
                        h2 { "Edit record" }

                        label { "Attended at" }
                        input {
                            r#type: "datetime-local",
                            value: draft.read().attended_at.clone(),
                            oninput: move |evt: FormEvent| draft.write().attended_at = evt.value(),
                        }
                        label { "Weight" }
                        input {
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

            if confirming_delete() {
                ConfirmDialog {
                    message: "Delete this medical record?",
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
