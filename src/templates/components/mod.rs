use crate::domain::{Listing, ListingStatus};
use crate::templates::listing_path;
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn status_badge(status: ListingStatus) -> Markup {
    let color = if status.is_under_construction() {
        "bg-yellow-100 text-yellow-800"
    } else {
        "bg-green-100 text-green-800"
    };

    html! {
        span class={ "status-badge px-2 py-1 rounded text-xs font-semibold " (color) } {
            (status.label())
        }
    }
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a href=(listing_path(&listing.id)) class="listing-card block" data-listing-id=(listing.id) {
            div class="bg-white rounded-lg shadow-lg overflow-hidden hover:shadow-xl transition-all duration-300" {
                div class="relative" {
                    @if let Some(src) = listing.thumbnail() {
                        img src=(src) alt=(listing.title) class="w-full h-48 object-cover";
                    } @else {
                        div class="w-full h-48 bg-gray-200 flex items-center justify-center" {
                            span class="text-gray-500" { "Imagem do Imóvel" }
                        }
                    }
                    div class="absolute top-4 left-4" {
                        (status_badge(listing.status))
                    }
                }

                div class="p-6" {
                    h3 class="text-xl font-semibold mb-2 text-gray-900" { (listing.title) }
                    p class="text-gray-600 mb-4" { (listing.location) }
                    p class="text-gray-600 mb-4" { (listing.size_label()) }

                    div class="flex items-center gap-4 mb-4 text-gray-600" {
                        span title="Quartos" { (bed_icon()) " " (listing.bedrooms.to_string()) }
                        span title="Banheiros" { (bath_icon()) " " (listing.bathrooms.to_string()) }
                    }

                    div class="price text-2xl font-bold text-blue-900 mb-4" { (listing.price.to_string()) }

                    div class="text-center w-full bg-blue-600 text-white py-2 rounded-lg" { "Ver Detalhes" }
                }
            }
        }
    }
}

/// Error state with a single way out.
pub fn error_panel(title: &str, message: &str, action_href: &str, action_label: &str) -> Markup {
    html! {
        div class="error-state text-center py-12" role="alert" {
            div class="bg-red-50 border border-red-200 rounded-lg p-8 max-w-md mx-auto" {
                (warning_icon())
                h2 class="text-2xl font-bold text-red-800 mb-2" { (title) }
                p class="error-message text-red-600 mb-6" { (message) }
                a href=(action_href) class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg inline-block" {
                    (action_label)
                }
            }
        }
    }
}

pub fn empty_state() -> Markup {
    html! {
        div class="empty-state col-span-full text-center text-gray-500 py-12" {
            p class="text-xl text-gray-600 mb-2" { "Nenhum imóvel encontrado" }
            p class="text-gray-500" { "Tente novamente mais tarde ou entre em contato conosco." }
        }
    }
}

pub fn back_link() -> Markup {
    html! {
        a href="/" class="back-link inline-flex items-center gap-2 text-blue-100 hover:text-white" {
            (chevron_left("w-5 h-5"))
            "Voltar para Imóveis"
        }
    }
}

fn warning_icon() -> Markup {
    html! {
        svg class="w-16 h-16 text-red-400 mx-auto mb-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-2.5L13.732 4c-.77-.833-1.964-.833-2.732 0L3.732 16.5c-.77.833.192 2.5 1.732 2.5z" {}
        }
    }
}

pub fn chevron_left(class: &str) -> Markup {
    chevron(class, "M15 19l-7-7 7-7")
}

pub fn chevron_right(class: &str) -> Markup {
    chevron(class, "M9 5l7 7-7 7")
}

fn chevron(class: &str, d: &str) -> Markup {
    html! {
        svg class=(class) fill="none" stroke="currentColor" viewBox="0 0 24 24" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(d) {}
        }
    }
}

fn bed_icon() -> Markup {
    html! {
        svg class="inline w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 18v-6a2 2 0 012-2h14a2 2 0 012 2v6M3 14h18M7 10V7h4v3" {}
        }
    }
}

fn bath_icon() -> Markup {
    html! {
        svg class="inline w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 12h16v3a4 4 0 01-4 4H8a4 4 0 01-4-4v-3zM6 12V6a2 2 0 014 0" {}
        }
    }
}
