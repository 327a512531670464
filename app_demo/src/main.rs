// crypto_demo/app_demo/src/main.rs

mod screen;
mod views;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crypto_workflow::service::{BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use crypto_workflow::{CryptoService, HttpCryptoService, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use screen::Screen;
use views::Navigation;

#[derive(Parser, Debug)]
#[command(name = "crypto-demo", version, about = "RSA / ECC / ElGamal demo client")]
struct Args {
    /// Base URL of the crypto service
    #[arg(long, default_value = DEFAULT_BASE_URL, env = BASE_URL_ENV)]
    service_url: String,

    /// Give up on a request after this many seconds (no limit by default)
    #[arg(long, env = TIMEOUT_ENV)]
    timeout_secs: Option<u64>,

    /// View shown at startup
    #[arg(long, value_enum, default_value_t = View::Cipher)]
    view: View,

    /// Keep previous output on screen instead of clearing between menus
    #[arg(long)]
    no_clear: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Cipher,
    Signature,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    // Logs go to stderr so they stay out of the menus.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crypto_workflow=info,crypto_demo=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ServiceConfig::new(args.service_url);
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    info!(base_url = %config.base_url, timeout = ?config.timeout, "using crypto service");

    let service: Arc<dyn CryptoService> = Arc::new(HttpCryptoService::new(config));
    let screen = Screen::new(!args.no_clear);

    // Each view gets a fresh workflow; its state is dropped when the user leaves it.
    let mut view = args.view;
    loop {
        let next = match view {
            View::Cipher => views::cipher_view(Arc::clone(&service), &screen).await?,
            View::Signature => views::signature_view(Arc::clone(&service), &screen).await?,
        };
        match next {
            Navigation::Switch(other) => view = other,
            Navigation::Quit => break,
        }
    }

    println!("Exiting...");
    Ok(())
}
