use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use momo_checkout::application::checkout::CheckoutEngine;
use momo_checkout::config::{Config, ENV_BASE_URL};
use momo_checkout::domain::ports::PaymentGatewayBox;
use momo_checkout::infrastructure::http::HttpPaymentGateway;
use momo_checkout::infrastructure::sandbox::SandboxGateway;
use momo_checkout::interfaces::console::session::ConsoleSession;
use std::io;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the payments API (overrides MOMO_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Accept submissions locally without calling the payments API
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().into_diagnostic()?;

    let gateway: PaymentGatewayBox = if cli.dry_run {
        Box::new(SandboxGateway::new())
    } else {
        let base_url = cli
            .base_url
            .or_else(|| config.base_url.clone())
            .ok_or_else(|| miette!("a base URL is required: pass --base-url or set {ENV_BASE_URL}"))?;
        Box::new(HttpPaymentGateway::new(base_url, config.api_key.clone()))
    };

    let engine = Arc::new(CheckoutEngine::new(gateway, config.merchant_id.clone()));

    let stdout = io::stdout();
    let mut session = ConsoleSession::new(engine, tokio::io::stdin(), stdout.lock());
    session.run().await.into_diagnostic()?;

    Ok(())
}
