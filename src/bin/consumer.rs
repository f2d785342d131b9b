use anyhow::Result;
use clap::Parser;
use dateval::client::ProviderClient;
use dateval::config::ConsumerConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Ask the provider whether a date is valid and print its answer.
#[derive(Debug, Parser)]
#[command(name = "consumer", version)]
struct Args {
    /// Date to validate, e.g. 04/05/2018 (MM/DD/YYYY, optionally with a time)
    #[arg(default_value = "")]
    date: String,

    /// Provider base url, defaults to CONSUMER_PROVIDER_URL
    #[arg(long)]
    provider_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or("dateval=info,consumer=info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let provider_url = match args.provider_url {
        Some(url) => url,
        None => ConsumerConfig::from_env()?.provider_url,
    };

    let client = ProviderClient::new(&provider_url)?;
    let response = client.validate_date_time(&args.date).await?;

    let status = response.status();
    let body = response.text().await?;
    println!("{}", status);
    if !body.is_empty() {
        println!("{}", body);
    }

    Ok(())
}
