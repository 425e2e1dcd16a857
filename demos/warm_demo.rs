//! Warm a live browser session and print the report.
//!
//! Launches a local Chromium, warms the sites given on the command line
//! (or the built-in low-risk list), and emits the session report as JSON.
//!
//! Usage:
//! ```bash
//! cargo run --example warm_demo -- https://www.wikipedia.org https://www.amazon.com
//! ```

use chromiumoxide::browser::BrowserConfig;
use futures::StreamExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use warmup_engine::{default_warmup_sites, CdpBrowser, SessionWarmer, WarmerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suppress noisy chromiumoxide errors from unrecognized CDP events
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info")
            .add_directive("chromiumoxide::conn=warn".parse().unwrap())
            .add_directive("chromiumoxide::handler=warn".parse().unwrap())
    });
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let sites: Vec<String> = {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.is_empty() {
            default_warmup_sites()
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            args
        }
    };

    let (browser, mut handler) =
        chromiumoxide::Browser::launch(BrowserConfig::builder().with_head().build()?).await?;
    tokio::spawn(async move { while handler.next().await.is_some() {} });

    let browser = CdpBrowser::new(browser);
    let mut warmer = SessionWarmer::new(WarmerConfig::default());
    let report = warmer.warm_session(&browser, &sites).await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
