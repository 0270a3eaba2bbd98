// src/tests/router_tests/fragment_tests.rs

use crate::tests::utils::{app_for, bare_studio, body_string, detail_path, get, loft, Upstream};

#[test]
fn plans_fragment_renders_requested_slide_only() {
    let base = Upstream::new().json(&detail_path("abc123"), loft()).start();

    let resp = get(&app_for(&base), "/apartment/abc123/plans?slide=1");
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert!(html.starts_with(r#"<div id="floor-plans""#));
    assert!(!html.contains("<html"));
    assert!(html.contains(r#"src="/img/p2.png""#));
    // successor is requested after the period
    assert!(html.contains(r#"hx-get="/apartment/abc123/plans?slide=2" hx-trigger="load delay:5s""#));
}

#[test]
fn last_plan_wraps_to_first() {
    let base = Upstream::new().json(&detail_path("abc123"), loft()).start();

    let html = body_string(get(&app_for(&base), "/apartment/abc123/plans?slide=2"));
    assert!(html.contains(r#"hx-get="/apartment/abc123/plans?slide=0" hx-trigger"#));
}

#[test]
fn gallery_fragment_pages_photos() {
    let base = Upstream::new().json(&detail_path("abc123"), loft()).start();

    let html = body_string(get(&app_for(&base), "/apartment/abc123/gallery?slide=1"));
    assert!(html.starts_with(r#"<div id="gallery""#));
    assert!(html.contains(r#"src="/img/g4.jpg""#));
    assert!(html.contains("Loft Central - foto 4"));
}

#[test]
fn fragment_for_listing_without_images_is_empty() {
    let base = Upstream::new().json(&detail_path("st-9"), bare_studio()).start();
    let app = app_for(&base);

    let plans = get(&app, "/apartment/st-9/plans");
    assert_eq!(plans.status(), 200);
    assert_eq!(body_string(plans), "");

    assert_eq!(body_string(get(&app, "/apartment/st-9/gallery")), "");
}

#[test]
fn fragment_for_missing_listing_is_404() {
    let base = Upstream::new().start();

    assert_eq!(get(&app_for(&base), "/apartment/nope/plans").status(), 404);
}
