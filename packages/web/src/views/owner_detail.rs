//! Owner page: contact details with inline editing, the owner's animals,
//! and the add/edit animal modal.

use dioxus::prelude::*;
use ui::format::display_phone;
use ui::hooks::owner::use_owner_page;
use ui::{use_auth, ConfirmDialog, Header, ModalOverlay};

use crate::Route;

#[component]
pub fn OwnerDetail(id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let id_signal = use_signal(|| id.clone());
    let page = use_owner_page(
        id_signal.into(),
        EventHandler::new(move |_| {
            nav.push(Route::Dashboard {});
        }),
    );

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let mut draft = page.draft;
    let mut owner_draft = page.owner_draft;
    let loading = page.loading;
    let owner = page.owner;
    let animals = page.animals;
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
                } else if let Some(owner) = owner() {
                    div {
                        class: "page-heading",
                        div {
                            h1 { "{owner.name}" }
                            p { class: "page-heading__subtitle", {display_phone(&owner.phone)} }
                        }
                        div {
                            class: "page-heading__actions",
                            if owner_draft().is_none() {
                                button {
                                    class: "secondary",
                                    onclick: {
                                        let page = page.clone();
                                        move |_| page.clone().start_edit_owner()
                                    },
                                    "Edit contact"
                                }
                            }
                            button {
                                class: "danger",
                                onclick: {
                                    let page = page.clone();
                                    move |_| page.clone().request_delete_owner()
                                },
                                "Delete owner"
                            }
                        }
                    }

                    if owner_draft().is_some() {
                        div {
                            class: "inline-editor",
                            h2 { "Edit contact" }
                            label { "Name" }
                            input {
                                value: owner_draft.read().as_ref().map(|d| d.name.clone()).unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(draft) = owner_draft.write().as_mut() {
                                        draft.name = evt.value();
                                    }
                                },
                            }
                            label { "Phone" }
                            input {
                                value: owner_draft.read().as_ref().map(|d| d.phone.clone()).unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(draft) = owner_draft.write().as_mut() {
                                        draft.phone = evt.value();
                                    }
                                },
                            }
                            label { "Email" }
                            input {
                                value: owner_draft.read().as_ref().map(|d| d.email.clone()).unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    if let Some(draft) = owner_draft.write().as_mut() {
                                        draft.email = evt.value();
                                    }
                                },
                            }
                            div {
                                class: "form-row",
                                div {
                                    label { "City" }
                                    input {
                                        value: owner_draft.read().as_ref().map(|d| d.city.clone()).unwrap_or_default(),
                                        oninput: move |evt: FormEvent| {
                                            if let Some(draft) = owner_draft.write().as_mut() {
                                                draft.city = evt.value();
                                            }
                                        },
                                    }
                                }
                                div {
                                    label { "State" }
                                    input {
                                        value: owner_draft.read().as_ref().map(|d| d.state.clone()).unwrap_or_default(),
                                        oninput: move |evt: FormEvent| {
                                            if let Some(draft) = owner_draft.write().as_mut() {
                                                draft.state = evt.value();
                                            }
                                        },
                                    }
                                }
                            }
                            div {
                                class: "form-actions",
                                button {
                                    class: "secondary",
                                    onclick: {
                                        let page = page.clone();
                                        move |_| page.clone().cancel_edit_owner()
                                    },
                                    "Cancel"
                                }
                                button {
                                    class: "primary",
                                    onclick: {
                                        let page = page.clone();
                                        move |_| {
                                            spawn(page.clone().save_owner());
                                        }
                                    },
                                    "Save"
                                }
                            }
                        }
                    }

                    div {
                        class: "page-heading",
                        h2 { "Animals" }
                        button {
                            class: "primary",
                            onclick: {
                                let page = page.clone();
                                move |_| page.clone().open_create()
                            },
                            "Add animal"
                        }
                    }

                    if animals().is_empty() {
                        p { class: "empty-state", "No animals registered for this owner." }
                    } else {
                        div {
                            class: "card-grid",
                            for animal in animals() {
                                div {
                                    key: "{animal.id}",
                                    class: "card",
                                    div {
                                        class: "card__body",
                                        onclick: {
                                            let id = animal.id.clone();
                                            move |_| {
                                                nav.push(Route::AnimalDetail { id: id.clone() });
                                            }
                                        },
                                        h3 { "{animal.name}" }
                                        p { "{animal.species}" }
                                        if let Some(breed) = &animal.breed {
                                            p { class: "card__muted", "{breed}" }
                                        }
                                    }
                                    div {
                                        class: "card__actions",
                                        button {
                                            class: "secondary",
                                            onclick: {
                                                let page = page.clone();
                                                let animal = animal.clone();
                                                move |_| page.clone().open_edit(&animal)
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "danger",
                                            onclick: {
                                                let page = page.clone();
                                                let animal = animal.clone();
                                                move |_| page.clone().request_delete_animal(&animal)
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    p { class: "empty-state", "Owner not found." }
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
                            if editing().is_some() { "Edit animal" } else { "New animal" }
                        }

                        label { "Name" }
                        input {
                            value: draft.read().name.clone(),
                            oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                        }
                        label { "Species" }
                        input {
                            placeholder: "dog, cat, ...",
                            value: draft.read().species.clone(),
                            oninput: move |evt: FormEvent| draft.write().species = evt.value(),
                        }
                        label { "Breed (optional)" }
                        input {
                            value: draft.read().breed.clone(),
                            oninput: move |evt: FormEvent| draft.write().breed = evt.value(),
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
