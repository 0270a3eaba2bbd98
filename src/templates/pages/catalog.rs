// templates/pages/catalog.rs

use crate::api::FetchError;
use crate::domain::Listing;
use crate::templates::{
    components::{empty_state, error_panel, listing_card},
    layouts::REGIONS,
    site_layout,
};
use maud::{html, Markup};

pub fn catalog_page(listings: &Result<Vec<Listing>, FetchError>) -> Markup {
    site_layout(
        "Imóveis",
        html! {
            (hero())
            (about())
            (regions())

            section id="imoveis" class="py-16 bg-white" {
                div class="container mx-auto px-4" {
                    h2 class="text-3xl font-bold text-center mb-12" { "Imóveis da GT. Building" }

                    @match listings {
                        Err(err) => {
                            (error_panel("Erro ao Carregar Imóveis", &err.catalog_message(), "/", "Tentar Novamente"))
                        }
                        Ok(listings) => {
                            div class="listing-grid grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto" {
                                @for listing in listings {
                                    (listing_card(listing))
                                }
                                @if listings.is_empty() {
                                    (empty_state())
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn hero() -> Markup {
    html! {
        section class="bg-blue-900 text-white py-20" {
            div class="container mx-auto px-4 grid md:grid-cols-2 gap-12 items-center" {
                div {
                    h1 class="text-4xl md:text-5xl font-bold mb-6" {
                        "Descubra os Melhores Lançamentos imobiliários em Curitiba"
                    }
                    p class="text-xl mb-8 text-blue-100" {
                        "Encontre o apartamento dos seus sonhos com as melhores condições e localização privilegiada."
                    }
                    a href="#imoveis" class="bg-blue-600 hover:bg-blue-700 px-6 py-3 rounded-lg inline-block" {
                        "Ver Imóveis"
                    }
                }
                div class="flex justify-center" {
                    div class="w-80 h-80 rounded-full border-2 border-blue-600 overflow-hidden" {
                        img src="/static/myhero.png" alt="Imagem destaque" class="object-cover w-full h-full";
                    }
                }
            }
        }
    }
}

const STATS: [(&str, &str); 4] = [
    ("14", "PROJETOS NO APTO"),
    ("6", "ANOS DE HISTÓRIA"),
    ("PR", "SEDE"),
    ("81", "PUBLICAÇÕES"),
];

fn about() -> Markup {
    html! {
        section class="py-16 bg-white" {
            div class="container mx-auto px-4" {
                h2 class="text-3xl font-bold text-center mb-12" { "Sobre a GT. Building" }
                p class="max-w-4xl mx-auto text-center mb-12 text-lg text-gray-600 leading-relaxed" {
                    "A GT. Building é uma empresa especializada em incorporação, com foco em projetos residenciais de qualidade. "
                    "Nosso último projeto, \"Trio Pinheirinho\", foi entregue em novembro de 2024, demonstrando nosso compromisso "
                    "com a excelência e pontualidade na entrega."
                }
                div class="grid grid-cols-2 md:grid-cols-4 gap-8 max-w-4xl mx-auto" {
                    @for (value, label) in STATS {
                        div class="text-center" {
                            div class="text-3xl font-bold text-blue-900 mb-2" { (value) }
                            div class="text-gray-600" { (label) }
                        }
                    }
                }
            }
        }
    }
}

fn regions() -> Markup {
    html! {
        section class="py-16 bg-gray-50" {
            div class="container mx-auto px-4" {
                h2 class="text-3xl font-bold text-center mb-12" { "Principais regiões da GT. Building" }
                div class="grid md:grid-cols-2 gap-12 max-w-6xl mx-auto" {
                    div {
                        h3 class="text-xl font-semibold mb-6" { "Cidades" }
                        div class="bg-blue-600 text-white p-6 rounded-lg" {
                            div class="text-2xl font-bold mb-2" { "Curitiba" }
                            div class="text-blue-100" { "12 bairros ativos" }
                        }
                    }
                    div {
                        h3 class="text-xl font-semibold mb-6" { "Bairros" }
                        div class="grid grid-cols-2 gap-4" {
                            @for region in &REGIONS {
                                div class="bg-white p-4 rounded-lg shadow-sm" {
                                    div class="font-semibold" { (region.name) }
                                    div class="text-gray-600" { (region.listings) " imóveis" }
                                    div class="text-sm text-gray-500" { "Curitiba, Paraná" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
