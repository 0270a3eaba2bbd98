// src/tests/router_tests/contact_tests.rs

use crate::router::MAX_FORM_BYTES;
use crate::tests::utils::{
    app_for, bare_studio, body_string, detail_path, get, header, loft, post_form, Upstream,
};
use url::Url;

const DISABLED: &str = r#"type="submit" disabled"#;

fn app() -> crate::app::App {
    let base = Upstream::new()
        .json(&detail_path("abc123"), loft())
        .json(&detail_path("st-9"), bare_studio())
        .start();
    app_for(&base)
}

#[test]
fn complete_draft_redirects_to_messaging_link() {
    let resp = post_form(
        &app(),
        "/apartment/abc123/contact",
        "name=Ana&email=ana%40x.com&phone=11+99999-0000",
    );

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Referrer-Policy"), Some("no-referrer"));

    let location = Url::parse(header(&resp, "Location").unwrap()).unwrap();
    assert_eq!(location.host_str(), Some("wa.me"));
    assert_eq!(location.path(), "/5511988887777");

    let text = location
        .query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    assert_eq!(
        text,
        "Olá! Meu nome é Ana.\nEmail: ana@x.com\nTelefone: 11 99999-0000\n\
         Tenho interesse no imóvel: Loft Central - ID: abc123"
    );
}

#[test]
fn incomplete_draft_is_a_no_op() {
    let resp = post_form(&app(), "/apartment/abc123/contact", "name=Ana&email=&phone=1");

    assert_eq!(resp.status(), 204);
    assert!(header(&resp, "Location").is_none());
}

#[test]
fn listing_without_number_is_a_no_op() {
    let resp = post_form(
        &app(),
        "/apartment/st-9/contact",
        "name=Ana&email=ana%40x.com&phone=1",
    );

    assert_eq!(resp.status(), 204);
}

#[test]
fn submit_button_tracks_typed_draft() {
    let app = app();

    let ready = body_string(get(
        &app,
        "/apartment/abc123/contact?name=Ana&email=a%40x.com&phone=1",
    ));
    assert!(ready.starts_with(r#"<button id="contact-submit""#));
    assert!(!ready.contains(DISABLED));

    let empty_name = body_string(get(
        &app,
        "/apartment/abc123/contact?name=&email=a%40x.com&phone=1",
    ));
    assert!(empty_name.contains(DISABLED));

    let no_number = body_string(get(
        &app,
        "/apartment/st-9/contact?name=Ana&email=a%40x.com&phone=1",
    ));
    assert!(no_number.contains(DISABLED));
}

#[test]
fn contact_for_missing_listing_is_404() {
    let resp = post_form(&app(), "/apartment/nope/contact", "name=Ana&email=a&phone=1");
    assert_eq!(resp.status(), 404);
}

#[test]
fn oversized_form_is_rejected_before_parsing() {
    let padding = "x".repeat(MAX_FORM_BYTES as usize);
    let form = format!("name=Ana&email=ana%40x.com&note={padding}&phone=1");

    let resp = post_form(&app(), "/apartment/abc123/contact", &form);

    assert_eq!(resp.status(), 413);
    assert!(header(&resp, "Location").is_none());
}

#[test]
fn form_at_the_limit_is_accepted() {
    let prefix = "name=Ana&email=ana%40x.com&phone=1&note=";
    let form = format!("{prefix}{}", "x".repeat(MAX_FORM_BYTES as usize - prefix.len()));
    assert_eq!(form.len() as u64, MAX_FORM_BYTES);

    let resp = post_form(&app(), "/apartment/abc123/contact", &form);

    assert_eq!(resp.status(), 303);
}
