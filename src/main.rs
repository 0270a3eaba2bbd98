use crate::api::ListingsApi;
use crate::app::App;
use crate::config::{Cli, Config};
use crate::router::handle;
use astra::Server;
use clap::Parser;
use std::time::Instant;
use tracing::{error, info};

mod api;
mod app;
mod carousel;
mod config;
mod contact;
mod domain;
mod errors;
mod maps;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_site=info".into()),
        )
        .init();

    let cfg = match Config::from_cli(Cli::parse()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let api = match ListingsApi::new(&cfg.api) {
        Ok(api) => api,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    info!(
        listen = %cfg.listen,
        api = %api.base_url(),
        workers = cfg.workers,
        "starting server"
    );

    let app = App::new(api, cfg.site);
    let server = Server::bind(&cfg.listen).max_workers(cfg.workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    error!(%method, %path, "{err}");
                }
                templates::html_error_response(err)
            }
        };

        info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down");
}
