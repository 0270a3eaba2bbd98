// src/tests/router_tests/detail_tests.rs

use crate::tests::utils::{
    app_for, bare_studio, body_string, detail_path, get, loft, unreachable_app, Upstream,
};
use scraper::{Html, Selector};

fn select_count(html: &str, selector: &str) -> usize {
    let doc = Html::parse_document(html);
    doc.select(&Selector::parse(selector).unwrap()).count()
}

fn loft_app() -> crate::app::App {
    let base = Upstream::new().json(&detail_path("abc123"), loft()).start();
    app_for(&base)
}

#[test]
fn detail_page_shows_listing_with_carousels_and_map() {
    let resp = get(&loft_app(), "/apartment/abc123");
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert!(html.contains("Loft Central"));
    assert!(html.contains("R$ 450.000"));
    assert!(html.contains("Vista para o parque."));
    assert!(html.contains("+55 (11) 98888-7777"));

    // three floor plans, one per slide, starting on the first
    assert_eq!(select_count(&html, "#floor-plans .indicator"), 3);
    assert_eq!(select_count(&html, "#floor-plans .indicator.active"), 1);
    assert!(html.contains(r#"src="/img/p1.png""#));
    assert!(!html.contains(r#"src="/img/p2.png""#));

    // four photos, pages of three
    assert_eq!(select_count(&html, "#gallery .indicator"), 2);
    assert_eq!(select_count(&html, "#gallery .carousel-slide img"), 3);

    assert_eq!(select_count(&html, "#location iframe"), 1);
    assert_eq!(select_count(&html, "button.contact-open[disabled]"), 0);
}

#[test]
fn plan_query_selects_slide() {
    let html = body_string(get(&loft_app(), "/apartment/abc123?plan=2&photos=1"));

    assert!(html.contains(r#"src="/img/p3.png""#));
    assert!(!html.contains(r#"src="/img/p1.png""#));
    assert!(html.contains(r#"src="/img/g4.jpg""#));
    assert!(!html.contains(r#"src="/img/g1.jpg""#));
}

#[test]
fn out_of_range_slide_is_ignored() {
    let html = body_string(get(&loft_app(), "/apartment/abc123?plan=7"));

    assert!(html.contains(r#"src="/img/p1.png""#));
    assert_eq!(select_count(&html, "#floor-plans .indicator.active"), 1);
}

#[test]
fn listing_without_images_or_contact() {
    let base = Upstream::new().json(&detail_path("st-9"), bare_studio()).start();

    let resp = get(&app_for(&base), "/apartment/st-9");
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert_eq!(select_count(&html, "#floor-plans"), 0);
    assert_eq!(select_count(&html, "#gallery"), 0);
    assert_eq!(select_count(&html, "#location"), 0);
    assert!(html.contains("Sem imagem"));
    assert!(html.contains("Disponível"));
    assert_eq!(select_count(&html, "button.contact-open[disabled]"), 1);
    assert_eq!(select_count(&html, "dialog"), 0);
}

#[test]
fn missing_listing_is_distinct_from_failure() {
    let base = Upstream::new()
        .route(&detail_path("broken"), 500, "")
        .start();
    let app = app_for(&base);

    let missing = get(&app, "/apartment/nope");
    assert_eq!(missing.status(), 404);
    let missing = body_string(missing);
    assert!(missing.contains("Imóvel não encontrado"));
    assert!(missing.contains("Voltar para Imóveis"));

    let broken = get(&app, "/apartment/broken");
    assert_eq!(broken.status(), 502);
    let broken = body_string(broken);
    assert!(broken.contains("Erro ao carregar imóvel: 500"));
    assert!(!broken.contains("Imóvel não encontrado"));
}

#[test]
fn unreachable_upstream_on_detail() {
    let resp = get(&unreachable_app(), "/apartment/abc123");
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("Erro de conexão"));
}
