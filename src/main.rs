use clap::Parser;
use gem_regrader::config::Cli;
use gem_regrader::errors::Result;
use gem_regrader::fetcher::{read_or_load, DocumentKind, DocumentLoader, NinjaClient};
use gem_regrader::models::GemRules;
use gem_regrader::report::{render_report, ReportOptions};
use gem_regrader::storage::DocumentCache;
use tracing::error;

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<Vec<String>> {
    let client = NinjaClient::new(cli.league.clone(), cli.ninja_url.clone(), cli.quality_url.clone())?;
    let cache = if cli.no_cache || cli.is_offline() {
        None
    } else {
        Some(DocumentCache::initialize(&cli.database_url).await?)
    };
    let mut loader = DocumentLoader::new(client, cache, cli.cache_ttl());

    let quality_html = read_or_load(cli.gems_html.as_deref(), DocumentKind::QualityTable, &mut loader).await?;
    let prices_json = read_or_load(cli.prices_json.as_deref(), DocumentKind::GemPrices, &mut loader).await?;
    let currency_json = read_or_load(cli.currency_json.as_deref(), DocumentKind::CurrencyRates, &mut loader).await?;

    let options = ReportOptions {
        min_amount: cli.min_amount,
        count: cli.count,
        guaranteed_only: cli.guaranteed,
        price_field: cli.price_field.clone(),
        price_label: cli.price_label.clone(),
        currencies: cli.currency_names(),
    };
    render_report(&quality_html, &prices_json, &currency_json, &GemRules::default(), &options)
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gem_regrader=info"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
