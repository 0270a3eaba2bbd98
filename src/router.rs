use crate::app::App;
use crate::contact::ContactDraft;
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, no_content, plain_text, see_other, ResultResp,
};
use crate::templates::fragments::{
    floor_plan_carousel, gallery_carousel, submit_button, CarouselKind,
};
use crate::templates::pages::{self, DetailVm};
use astra::Request;
use maud::html;
use std::io::Read;
use tracing::{debug, info, warn};

pub const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().unwrap_or_default().to_owned();

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => catalog(app),
        ("GET", ["healthz"]) => plain_text("ok"),

        ("GET", ["apartment", id]) => detail(app, &decode_id(id)?, &query),
        ("GET", ["apartment", id, "plans"]) => {
            carousel_fragment(app, &decode_id(id)?, CarouselKind::FloorPlans, &query)
        }
        ("GET", ["apartment", id, "gallery"]) => {
            carousel_fragment(app, &decode_id(id)?, CarouselKind::Gallery, &query)
        }
        ("GET", ["apartment", id, "contact"]) => contact_check(app, &decode_id(id)?, &query),
        ("POST", ["apartment", id, "contact"]) => contact_submit(app, &decode_id(id)?, req),

        _ => Err(ServerError::NotFound),
    }
}

fn catalog(app: &App) -> ResultResp {
    let listings = app.api.fetch_listings();
    let status = match &listings {
        Ok(_) => 200,
        Err(err) => err.http_status(),
    };

    html_response_with_status(status, pages::catalog_page(&listings))
}

fn detail(app: &App, id: &str, query: &str) -> ResultResp {
    let listing = match app.api.fetch_listing(id) {
        Ok(listing) => listing,
        Err(err) => {
            return html_response_with_status(err.http_status(), pages::detail_error_page(&err))
        }
    };

    let vm = DetailVm {
        listing: &listing,
        gallery: app.gallery(&listing, query_index(query, "photos")),
        floor_plans: app.floor_plans(&listing, query_index(query, "plan")),
    };

    html_response(pages::detail_page(&vm))
}

fn carousel_fragment(app: &App, id: &str, kind: CarouselKind, query: &str) -> ResultResp {
    let listing = app.api.fetch_listing(id)?;
    let slide = query_index(query, "slide");

    let markup = match kind {
        CarouselKind::FloorPlans => app
            .floor_plans(&listing, slide)
            .map(|c| floor_plan_carousel(&listing.id, &listing.title, &c)),
        CarouselKind::Gallery => app
            .gallery(&listing, slide)
            .map(|c| gallery_carousel(&listing.id, &listing.title, &c)),
    };

    // No images: the carousel renders nothing.
    html_response(markup.unwrap_or_else(|| html! {}))
}

fn contact_check(app: &App, id: &str, query: &str) -> ResultResp {
    let listing = app.api.fetch_listing(id)?;
    let draft = ContactDraft::from_form(query.as_bytes());

    html_response(submit_button(draft.can_submit(listing.contact_number())))
}

fn contact_submit(app: &App, id: &str, req: Request) -> ResultResp {
    let body = read_form_body(req)?;
    let draft = ContactDraft::from_form(&body);
    let listing = app.api.fetch_listing(id)?;

    let mut link = None;
    app.composer.submit(&draft, &listing, |url| link = Some(url));

    match link {
        Some(url) => {
            info!(listing = %listing.id, "contact request handed to messaging app");
            see_other(&url)
        }
        None => {
            debug!(listing = %listing.id, "contact request not sendable, ignoring");
            no_content()
        }
    }
}

fn decode_id(raw: &str) -> Result<String, ServerError> {
    let id = urlencoding::decode(raw)
        .map_err(|_| ServerError::BadRequest("listing id is not valid UTF-8".into()))?;
    if id.trim().is_empty() {
        return Err(ServerError::NotFound);
    }
    Ok(id.into_owned())
}

fn query_index(query: &str, key: &str) -> Option<usize> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.trim().parse().ok())
}

// One byte past the limit is enough to tell an oversized body from a full one.
fn read_form_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        warn!(limit = MAX_FORM_BYTES, "contact form body too large");
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(body)
}
