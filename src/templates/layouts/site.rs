use chrono::Datelike;
use maud::{html, Markup, DOCTYPE};

pub const BRAND: &str = "Vanessa Zaniolo";

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (BRAND) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="icon" type="image/svg+xml" href="/static/favicon/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body class="min-h-screen bg-white" {
                header class="bg-blue-900 text-white" {
                    div class="container mx-auto px-4 py-4 flex items-center justify-between" {
                        a href="/" class="flex items-center space-x-2" {
                            img src="/static/logo.png" alt="Logo" width="40" height="40" class="rounded-full bg-white p-1";
                            span class="text-xl font-semibold" { (BRAND) }
                        }
                        nav class="hidden md:flex items-center space-x-8" {
                            a href="/" class="hover:text-blue-200" { "Home" }
                            a href="/#imoveis" class="hover:text-blue-200" { "Imóveis" }
                            a href="#contato" class="hover:text-blue-200" { "Contato" }
                        }
                    }
                }

                (content)

                (footer())
            }
        }
    }
}

fn footer() -> Markup {
    let year = chrono::Local::now().year();

    html! {
        footer id="contato" class="bg-blue-900 text-white py-16" {
            div class="container mx-auto px-4" {
                div class="grid md:grid-cols-4 gap-8" {
                    div {
                        div class="flex items-center space-x-2 mb-4" {
                            img src="/static/logo.png" alt="Logo" width="40" height="40" class="rounded-full bg-white p-1";
                            span class="text-xl font-semibold" { "VZ " (BRAND) }
                        }
                        p class="text-blue-100 mb-6" {
                            "Encontre o imóvel dos seus sonhos com as melhores condições e atendimento personalizado."
                        }
                    }
                    div {
                        h3 class="text-lg font-semibold mb-4" { "Imóveis" }
                        ul class="space-y-2" {
                            li { "Apartamentos" }
                            li { "Lançamentos" }
                            li { "Comerciais" }
                        }
                    }
                    div {
                        h3 class="text-lg font-semibold mb-4" { "Regiões" }
                        ul class="space-y-2" {
                            @for region in REGIONS {
                                li { (region.name) }
                            }
                        }
                    }
                    div {
                        h3 class="text-lg font-semibold mb-4" { "Contato" }
                        ul class="space-y-2" {
                            li { "(41) 99999-9999" }
                            li { "contato@vanessazaniolo.com" }
                            li { "Curitiba, PR" }
                        }
                    }
                }
                div class="border-t border-blue-800 mt-8 pt-8 text-center" {
                    p class="text-blue-100" { "© " (year) " " (BRAND) ". Todos os direitos reservados." }
                }
            }
        }
    }
}

pub struct Region {
    pub name: &'static str,
    pub listings: u32,
}

/// Neighborhoods the agency works in, shown on the home page and footer.
pub const REGIONS: [Region; 4] = [
    Region { name: "Batel", listings: 3 },
    Region { name: "Champagnat", listings: 2 },
    Region { name: "Bigorrilho", listings: 4 },
    Region { name: "Cabral", listings: 2 },
];
