use std::io::Read;

use anyhow::{bail, Context};
use storefront::config::Config;
use storefront::core::{CurrencyConfig, MessageCatalog};
use storefront::pricing::{PricePayload, PricePresenter};
use storefront::shipping::{
    GraphqlShippingEstimator, ShippingEstimator, ShippingEvent, ShippingQuote, ShippingSimulator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: storefront price < payload.json\n       storefront shipping <sku-id> <seller> <zipcode>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Read a `PricePayload` from stdin and print its presentation
    Price,
    Shipping {
        sku_id: String,
        seller: u64,
        zipcode: String,
    },
}

impl Command {
    fn parse<S: AsRef<str>>(args: &[S]) -> anyhow::Result<Self> {
        let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
        match args.as_slice() {
            ["price"] => Ok(Self::Price),
            ["shipping", sku_id, seller, zipcode] => {
                let seller = seller
                    .parse()
                    .with_context(|| format!("Seller must be a number, got {:?}", seller))?;
                Ok(Self::Shipping {
                    sku_id: sku_id.to_string(),
                    seller,
                    zipcode: zipcode.to_string(),
                })
            }
            _ => bail!(USAGE),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Currency: {}", config.storefront.currency);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match Command::parse(args.as_slice())? {
        Command::Price => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read price payload from stdin")?;

            for line in price_output(&input, &config.storefront.currency)? {
                println!("{}", line);
            }
        }
        Command::Shipping {
            sku_id,
            seller,
            zipcode,
        } => {
            let estimator = GraphqlShippingEstimator::from_config(&config.shipping)?;
            let simulator = ShippingSimulator::new(sku_id, seller, config.shipping.country.clone());
            let quote = estimate_shipping(simulator, &zipcode, &estimator).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
    }

    Ok(())
}

/// Pretty JSON of the presentation followed by its rendered lines
fn price_output(input: &str, currency: &CurrencyConfig) -> anyhow::Result<Vec<String>> {
    let payload = PricePayload::from_json(input).context("Price payload is not valid JSON")?;
    let presentation = PricePresenter::present_payload(&payload, currency)?;

    let mut output = vec![serde_json::to_string_pretty(&presentation)?];
    output.extend(presentation.render(&MessageCatalog::new()));
    Ok(output)
}

async fn estimate_shipping<E>(
    mut simulator: ShippingSimulator,
    zipcode: &str,
    estimator: &E,
) -> anyhow::Result<ShippingQuote>
where
    E: ShippingEstimator + ?Sized,
{
    simulator.handle(ShippingEvent::ZipcodeChanged(zipcode.to_string()));

    if !simulator.can_submit() {
        bail!("Incomplete zipcode: {:?}", simulator.zipcode());
    }

    match simulator.run(estimator).await? {
        Some(quote) => Ok(quote.clone()),
        None => bail!("Shipping estimate was not requested"),
    }
}
