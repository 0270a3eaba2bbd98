use crate::contact::ContactDraft;
use crate::domain::Listing;
use crate::templates::listing_path;
use maud::{html, Markup};

pub const MODAL_ID: &str = "contact-modal";
pub const SUBMIT_ID: &str = "contact-submit";

// Closes the dialog once the browser has taken the submission to the new tab,
// and drops whatever was typed.
const ON_SUBMIT: &str = "var f = this; setTimeout(function () { f.reset(); \
     document.getElementById('contact-submit').disabled = true; \
     f.closest('dialog').close(); }, 0);";

pub fn contact_path(listing_id: &str) -> String {
    format!("{}/contact", listing_path(listing_id))
}

/// Opening button plus the modal. Without a contact number the button is
/// inert and no modal is rendered.
pub fn contact_modal(listing: &Listing) -> Markup {
    let has_target = listing.contact_number().is_some();
    let open = format!("document.getElementById('{MODAL_ID}').showModal()");

    html! {
        button type="button"
            class="contact-open inline-flex items-center gap-2 bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed text-white px-4 py-2 rounded-xl font-medium shadow"
            onclick=[has_target.then_some(open)]
            disabled[!has_target]
        {
            "Falar no WhatsApp"
        }

        @if has_target {
            dialog id=(MODAL_ID) class="w-full max-w-md rounded-2xl bg-white shadow-xl border p-6" {
                div class="flex items-start justify-between gap-4" {
                    div {
                        h3 class="text-lg font-semibold text-gray-900" { "Solicitar contato" }
                        p class="text-sm text-gray-500" { "Preencha seus dados e abriremos o WhatsApp." }
                    }
                    form method="dialog" {
                        button class="text-gray-400 hover:text-gray-600" aria-label="Fechar" { "✕" }
                    }
                }
                (contact_form(listing, &ContactDraft::default()))
            }
        }
    }
}

/// The form posts into a new browsing context that gets no handle on this page.
pub fn contact_form(listing: &Listing, draft: &ContactDraft) -> Markup {
    let path = contact_path(&listing.id);

    html! {
        form id="contact-form"
            class="mt-6 space-y-4"
            method="post"
            action=(path)
            target="_blank"
            rel="noopener noreferrer"
            hx-get=(path)
            hx-trigger="input delay:200ms"
            hx-target={ "#" (SUBMIT_ID) }
            hx-swap="outerHTML"
            onsubmit=(ON_SUBMIT)
        {
            div {
                label class="block text-sm text-gray-700 mb-1" for="contact-name" { "Nome" }
                input id="contact-name" name="name" type="text" placeholder="Seu nome"
                    value=(draft.name) required
                    class="w-full rounded-lg border px-3 py-2";
            }
            div {
                label class="block text-sm text-gray-700 mb-1" for="contact-email" { "Email" }
                input id="contact-email" name="email" type="email" placeholder="voce@email.com"
                    value=(draft.email) required
                    class="w-full rounded-lg border px-3 py-2";
            }
            div {
                label class="block text-sm text-gray-700 mb-1" for="contact-phone" { "Telefone" }
                input id="contact-phone" name="phone" type="tel" placeholder="(00) 00000-0000"
                    value=(draft.phone) required
                    class="w-full rounded-lg border px-3 py-2";
            }
            (submit_button(draft.can_submit(listing.contact_number())))
        }
    }
}

/// Swapped on every keystroke so it is enabled exactly when the draft can be sent.
pub fn submit_button(enabled: bool) -> Markup {
    html! {
        button id=(SUBMIT_ID)
            type="submit"
            disabled[!enabled]
            class="w-full inline-flex justify-center items-center gap-2 bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white px-4 py-2 rounded-xl font-medium"
        {
            "Abrir WhatsApp"
        }
    }
}
