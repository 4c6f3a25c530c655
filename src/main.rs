#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod http_handler;
mod logger;
mod tracking;

use crate::config::WatchConfig;
use crate::http_handler::http_client::HTTPClient;
use crate::tracking::{AircraftBoard, AreaFilter, Poller, Renderer};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = WatchConfig::from_env().unwrap_or_else(|e| fatal!("Invalid configuration: {e:?}"));
    let client = Arc::new(
        HTTPClient::new(config.base_url(), config.request_timeout())
            .unwrap_or_else(|e| fatal!("Could not build HTTP client: {e}")),
    );
    let filter = Arc::new(AreaFilter::from(&config));
    let board = Arc::new(AircraftBoard::new());
    info!(
        "Watching {} around home {} via {}, every {}s.",
        filter.area(),
        filter.home(),
        client.url(),
        config.poll_interval().as_secs()
    );

    let c_tok = CancellationToken::new();
    let poller = Poller::new(client, filter, Arc::clone(&board), config.poll_interval());
    let renderer = Renderer::new(Arc::clone(&board), config.empty_message());
    let poll_handle = tokio::spawn(poller.run(c_tok.clone()));
    let render_handle = tokio::spawn(renderer.run(c_tok.clone()));

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested."),
        Err(e) => error!("Could not listen for shutdown signal: {e}"),
    }
    c_tok.cancel();
    let (poll_res, render_res) = tokio::join!(poll_handle, render_handle);
    for res in [poll_res.map(|_| ()), render_res] {
        if let Err(e) = res {
            warn!("Task ended abnormally: {e}");
        }
    }
}
