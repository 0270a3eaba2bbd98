// src/tests/router_tests/catalog_tests.rs

use crate::tests::utils::{
    app_for, bare_studio, body_string, get, header, loft, unreachable_app, Upstream, CATALOG_PATH,
};
use scraper::{Html, Selector};
use serde_json::json;

fn select_count(html: &str, selector: &str) -> usize {
    let doc = Html::parse_document(html);
    doc.select(&Selector::parse(selector).unwrap()).count()
}

#[test]
fn catalog_renders_one_card_per_listing() {
    let base = Upstream::new()
        .json(CATALOG_PATH, json!({ "apartments": [loft(), bare_studio()] }))
        .start();
    let app = app_for(&base);

    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").unwrap().starts_with("text/html"));

    let html = body_string(resp);
    assert_eq!(select_count(&html, "a.listing-card"), 2);
    assert_eq!(select_count(&html, r#"a.listing-card[href="/apartment/abc123"]"#), 1);
    assert!(html.contains("R$ 450.000"));
    assert!(html.contains("R$ Sob consulta"));
    assert!(html.contains("Em construção"));
    assert!(html.contains("68 m²"));
    assert_eq!(select_count(&html, ".empty-state"), 0);
    assert_eq!(select_count(&html, ".error-state"), 0);
}

#[test]
fn empty_catalog_shows_empty_state() {
    let base = Upstream::new()
        .json(CATALOG_PATH, json!({ "apartments": [] }))
        .start();

    let resp = get(&app_for(&base), "/");
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert_eq!(select_count(&html, ".empty-state"), 1);
    assert!(html.contains("Nenhum imóvel encontrado"));
    assert_eq!(select_count(&html, "a.listing-card"), 0);
}

#[test]
fn upstream_failure_shows_status_and_retry() {
    let base = Upstream::new().route(CATALOG_PATH, 500, "").start();

    let resp = get(&app_for(&base), "/");
    assert_eq!(resp.status(), 502);

    let html = body_string(resp);
    assert_eq!(select_count(&html, ".error-state"), 1);
    assert!(html.contains("Erro ao carregar imóveis: 500"));
    assert!(html.contains("Tentar Novamente"));
    assert_eq!(select_count(&html, ".empty-state"), 0);
}

#[test]
fn unreachable_upstream_shows_connection_message() {
    let resp = get(&unreachable_app(), "/");
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("Erro de conexão. Verifique sua internet."));
}

#[test]
fn healthz_does_not_touch_upstream() {
    let resp = get(&unreachable_app(), "/healthz");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_is_a_404_page() {
    let resp = get(&unreachable_app(), "/admin");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Página não encontrada"));
}
