//! cert-check - certificate expiry monitoring check
//!
//! Fetches the leaf certificate named by a locator, computes expiry
//! metrics, and reports them with a monitoring-plugin exit status:
//! 0 (OK), 2 (CRITICAL), or 3 (UNKNOWN, configuration error).

use cert_check::cli::Cli;
use cert_check::runner;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Log to stderr so the scheduler only ever reads metrics on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.check_config();
    let locator = cli.cert.as_deref().unwrap_or("");

    let outcome = runner::execute(locator, &config).await;
    println!("{}", outcome.output);
    std::process::exit(outcome.state.exit_code());
}
