use crate::errors::ServerError;
use crate::templates::components::error_panel;
use crate::templates::site_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();

    let message = match &err {
        ServerError::NotFound => "Página não encontrada".to_string(),
        ServerError::BadRequest(msg) => format!("Requisição inválida: {msg}"),
        ServerError::PayloadTooLarge => "Formulário grande demais".to_string(),
        ServerError::Upstream(fetch) => fetch.detail_message(),
        ServerError::InternalError => "Erro interno do servidor".to_string(),
    };

    render_error(status, &message)
}

/// Build a full error page
fn render_error(status: u16, message: &str) -> Response {
    let page = site_layout(
        &format!("Erro {status}"),
        html! {
            main class="container mx-auto px-4 py-16" {
                (error_panel(&format!("Erro {status}"), message, "/", "Voltar para Imóveis"))
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
