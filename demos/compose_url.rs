use anyhow::{Context, Result};
use clap::Parser;
use url_composer::utils::config::LoggerConfig;
use url_composer::utils::logger::init_logger;
use url_composer::{query, AccessToken, Domain, Path, QueryItem, Scheme};

/// Compose a URL from a scheme, host, path and query pairs
#[derive(Parser, Debug)]
#[command(name = "compose_url")]
struct Args {
    /// One of http, https, ssh, ftp
    #[arg(long, default_value = "https")]
    scheme: String,

    host: String,

    path: String,

    /// Query pair in key=value form, may be repeated
    #[arg(short, long = "query", value_parser = parse_pair)]
    queries: Vec<(String, String)>,

    /// Access token, written to the URL fragment
    #[arg(long)]
    access_token: Option<String>,

    /// Append an empty tokenX pair
    #[arg(long)]
    token_x: bool,

    /// Print the base64 of the URL instead of the URL itself
    #[arg(long)]
    base64: bool,

    /// Optional logger configuration file
    #[arg(long)]
    log_config: Option<String>,
}

fn parse_pair(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let logger_config = LoggerConfig::load(args.log_config.as_deref())?;
    init_logger(&logger_config)?;

    let scheme: Scheme = args.scheme.parse()?;
    let items: Vec<QueryItem> = args.queries.into_iter().map(QueryItem::from).collect();
    let access_token = args.access_token.map(AccessToken::access_token);
    let token_x = args.token_x.then(|| AccessToken::token_x(""));

    let domain = Domain::compose(scheme, args.host, || {
        Path::compose(args.path, || query![items, token_x, access_token])
    });

    if args.base64 {
        println!("{}", domain.to_base64().context("Failed to encode URL")?);
    } else {
        println!("{}", domain.perform().context("Failed to compose URL")?);
    }

    Ok(())
}
