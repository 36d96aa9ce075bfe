mod app;
mod keys;
mod theme;
mod widgets;

use anyhow::Context;

use hitlist_core::config::Config;
use hitlist_core::page::HitPage;
use hitlist_core::platform;

/// Bundled starter page so the binary has something to show before the user
/// writes their own hits file.
const SAMPLE_HITS: &str = include_str!("../data/hits.toml");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let log_path = data_dir.join("hitlist.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("hitlist log: {}", log_path.display());

    tracing::info!("hitlist starting…");

    let config = Config::load().unwrap_or_default();

    let page = if config.results.path.exists() {
        HitPage::load(&config.results.path)?
    } else {
        tracing::info!(
            "no hits file at {}, using the bundled sample page",
            config.results.path.display()
        );
        HitPage::from_toml(SAMPLE_HITS).context("parsing bundled sample hits")?
    };

    let app = app::App::new(config, page);
    app.run().await
}
