//! CLI definition, routing, and tracing setup.

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use url::Url;

use webchurn_extract::extract;
use webchurn_fetch::Fetcher;
use webchurn_shared::load_config;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Webchurn: extract the readable content of a web page as markdown.
#[derive(Parser)]
#[command(
    name = "webchurn",
    version,
    about = "Extract a page's title, publish date, and body as markdown-in-JSON.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Page URL to churn.
    pub url: String,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Fetch the page, extract, and print the article as JSON.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    // Validate up front; the raw string is what resolution concatenates
    // against, so it is passed through untouched.
    Url::parse(&cli.url).map_err(|e| eyre!("invalid url {}: {e}", cli.url))?;

    let config = load_config()?;
    let fetcher = Fetcher::new(&config.fetch)?;

    info!(url = %cli.url, "churning page");
    let body = fetcher.fetch(&cli.url).await?;
    let article = extract(&cli.url, &body)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&article)?
    } else {
        serde_json::to_string(&article)?
    };
    println!("{json}");

    Ok(())
}
