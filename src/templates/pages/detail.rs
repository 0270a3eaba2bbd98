// templates/pages/detail.rs

use crate::api::FetchError;
use crate::domain::Listing;
use crate::maps;
use crate::templates::{
    components::{back_link, error_panel, status_badge},
    fragments::{
        contact_modal, floor_plan_carousel, gallery_carousel, FloorPlanCarousel, GalleryCarousel,
    },
    site_layout,
};
use maud::{html, Markup};

pub struct DetailVm<'a> {
    pub listing: &'a Listing,
    pub gallery: Option<GalleryCarousel>,
    pub floor_plans: Option<FloorPlanCarousel>,
}

pub fn detail_page(vm: &DetailVm) -> Markup {
    let listing = vm.listing;

    site_layout(
        &listing.title,
        html! {
            (detail_header())

            main class="container mx-auto px-4 py-8" data-listing-id=(listing.id) {
                div class="grid md:grid-cols-2 gap-8 mt-6" {
                    div class="space-y-4" {
                        @if let Some(gallery) = &vm.gallery {
                            (gallery_carousel(&listing.id, &listing.title, gallery))
                        } @else if let Some(src) = listing.thumbnail() {
                            img src=(src) alt=(listing.title) class="w-full h-80 object-cover rounded-lg shadow-lg";
                        } @else {
                            div class="w-full h-80 bg-gray-200 rounded-lg flex items-center justify-center shadow-lg" {
                                span class="text-gray-500" { "Sem imagem" }
                            }
                        }

                        div class="grid grid-cols-2 gap-4" {
                            (fact("Quartos", &listing.bedrooms.to_string()))
                            (fact("Banheiros", &listing.bathrooms.to_string()))
                        }
                    }

                    div class="space-y-6" {
                        div { (status_badge(listing.status)) }

                        div {
                            h1 class="text-4xl font-bold text-gray-900 mb-3" { (listing.title) }
                            p class="location text-lg text-gray-600 mb-2" { (listing.location) }
                            p class="text-gray-600 text-lg mb-6" { (listing.size_label()) }
                        }

                        div class="bg-gray-50 p-6 rounded-lg border border-gray-200" {
                            div class="text-sm text-gray-600 mb-2" { "Preço" }
                            div class="price text-4xl font-bold text-blue-900" { (listing.price.to_string()) }
                        }

                        @if let Some(description) = listing.description() {
                            div class="description bg-white p-6 rounded-lg border border-gray-200" {
                                h3 class="text-lg font-semibold text-gray-900 mb-3" { "Descrição" }
                                p class="text-gray-700 whitespace-pre-line leading-relaxed" { (description) }
                            }
                        }

                        div class="contact bg-blue-50 p-6 rounded-lg border border-blue-200" {
                            h3 class="text-lg font-semibold text-blue-900 mb-3" { "Entre em Contato" }
                            @if let Some(number) = listing.contact_number() {
                                p class="text-xl font-semibold text-blue-900 mb-4" { (number) }
                            }
                            (contact_modal(listing))
                        }
                    }
                }

                @if let Some(plans) = &vm.floor_plans {
                    section class="mt-12" {
                        h2 class="text-2xl font-bold text-gray-900 mb-6" { "Plantas" }
                        (floor_plan_carousel(&listing.id, &listing.title, plans))
                    }
                }

                (map_section(&listing.location))
            }
        },
    )
}

/// Full-page error state for a listing that could not be loaded.
pub fn detail_error_page(err: &FetchError) -> Markup {
    site_layout(
        "Erro ao Carregar Imóvel",
        html! {
            (detail_header())
            main class="container mx-auto px-4 py-16" {
                (error_panel("Erro ao Carregar Imóvel", &err.detail_message(), "/", "Voltar para Imóveis"))
            }
        },
    )
}

fn detail_header() -> Markup {
    html! {
        div class="bg-blue-900 text-white py-4" {
            div class="container mx-auto px-4 flex items-center justify-between" {
                (back_link())
                div class="text-sm text-blue-200" { "Detalhes do Imóvel" }
            }
        }
    }
}

fn fact(label: &str, value: &str) -> Markup {
    html! {
        div class="bg-blue-50 p-4 rounded-lg border border-blue-200" {
            div class="text-sm text-blue-600 font-medium" { (label) }
            div class="text-2xl font-bold text-blue-900" { (value) }
        }
    }
}

fn map_section(location: &str) -> Markup {
    let (Some(embed), Some(search)) = (maps::embed_url(location), maps::search_url(location)) else {
        return html! {};
    };

    html! {
        section id="location" class="mt-12" {
            h2 class="text-2xl font-bold text-gray-900 mb-6" { "Localização" }
            iframe src=(embed)
                title={ "Mapa: " (location) }
                class="w-full h-96 rounded-lg border"
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade" {}
            a href=(search) target="_blank" rel="noopener noreferrer" class="inline-block mt-4 text-blue-600 hover:underline" {
                "Abrir no Google Maps"
            }
        }
    }
}
