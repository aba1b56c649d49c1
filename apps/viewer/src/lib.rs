pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod console;
pub mod page;
pub mod views;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::HttpQuestionApi;
use crate::app::{App, Event};
use crate::config::Config;
use crate::console::Command;
use crate::page::MemoryPage;

/// Run the viewer against the configured API, driven by commands on stdin.
///
/// After every command the visible page is printed.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(api = %config.api_url, width = config.viewport_width, "Starting viewer");

    let api = HttpQuestionApi::new(&config.api_url)?;
    let mut app = App::new(MemoryPage::new(config.viewport_width), Arc::new(api));

    app.dispatch(Event::Init);
    app.settle().await;
    println!("{}", app.page().snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        if !console::apply(&mut app, command) {
            break;
        }
        app.settle().await;
        println!("{}", app.page().snapshot());
    }

    Ok(())
}
