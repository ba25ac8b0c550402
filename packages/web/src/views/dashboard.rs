//! Dashboard: every owner the clinic knows, searchable, with the
//! create/edit owner modal.

use dioxus::prelude::*;
use ui::format::display_phone;
use ui::hooks::use_dashboard;
use ui::{use_auth, Header, ModalOverlay};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let page = use_dashboard();

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let mut search = page.search;
    let mut draft = page.draft;
    let loading = page.loading;
    let filtered = page.filtered;
    let editing = page.editing;
    let modal_open = page.modal_open;

    rsx! {
        div {
            class: "page",
            Header {}

            main {
                class: "container",
                div {
                    class: "page-heading",
                    div {
                        h1 { "Owners" }
                        p { class: "page-heading__subtitle", "Manage owners and their animals" }
                    }
                    button {
                        class: "primary",
                        onclick: {
                            let page = page.clone();
                            move |_| page.clone().open_create()
                        },
                        "Add owner"
                    }
                }

                input {
                    class: "search-box",
                    r#type: "search",
                    placeholder: "Search by name, phone, or email",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }

                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if filtered().is_empty() {
                    p { class: "empty-state", "No owners found." }
                } else {
                    div {
                        class: "card-grid",
                        for owner in filtered() {
                            div {
                                key: "{owner.id}",
                                class: "card",
                                div {
                                    class: "card__body",
                                    onclick: {
                                        let id = owner.id.clone();
                                        move |_| {
                                            nav.push(Route::OwnerDetail { id: id.clone() });
                                        }
                                    },
                                    h3 { "{owner.name}" }
                                    p { {display_phone(&owner.phone)} }
                                    if let Some(email) = &owner.email {
                                        p { class: "card__muted", "{email}" }
                                    }
                                }
                                button {
                                    class: "secondary",
                                    onclick: {
                                        let page = page.clone();
                                        let owner = owner.clone();
                                        move |_| page.clone().open_edit(&owner)
                                    },
                                    "Edit"
                                }
                            }
                        }
                    }
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
                            if editing().is_some() { "Edit owner" } else { "New owner" }
                        }

                        label { "Name" }
                        input {
                            value: draft.read().name.clone(),
                            oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                        }
                        label { "Phone" }
                        input {
                            value: draft.read().phone.clone(),
                            oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                        }
                        label { "Email" }
                        input {
                            value: draft.read().email.clone(),
                            oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                        }
                        div {
                            class: "form-row",
                            div {
                                label { "Street" }
                                input {
                                    value: draft.read().street.clone(),
                                    oninput: move |evt: FormEvent| draft.write().street = evt.value(),
                                }
                            }
                            div {
                                label { "Number" }
                                input {
                                    value: draft.read().number.clone(),
                                    oninput: move |evt: FormEvent| draft.write().number = evt.value(),
                                }
                            }
                        }
                        div {
                            class: "form-row",
                            div {
                                label { "Neighborhood" }
                                input {
                                    value: draft.read().neighborhood.clone(),
                                    oninput: move |evt: FormEvent| draft.write().neighborhood = evt.value(),
                                }
                            }
                            div {
                                label { "Complement" }
                                input {
                                    value: draft.read().complement.clone(),
                                    oninput: move |evt: FormEvent| draft.write().complement = evt.value(),
                                }
                            }
                        }
                        div {
                            class: "form-row",
                            div {
                                label { "City" }
                                input {
                                    value: draft.read().city.clone(),
                                    oninput: move |evt: FormEvent| draft.write().city = evt.value(),
                                }
                            }
                            div {
                                label { "State" }
                                input {
                                    value: draft.read().state.clone(),
                                    oninput: move |evt: FormEvent| draft.write().state = evt.value(),
                                }
                            }
                            div {
                                label { "Zip code" }
                                input {
                                    value: draft.read().zip_code.clone(),
                                    oninput: move |evt: FormEvent| draft.write().zip_code = evt.value(),
                                }
                            }
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
        }
    }
}
