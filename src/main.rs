use eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use transport_card::{server, ConfigFile};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let config_file =
        serde_yaml::from_reader::<_, ConfigFile>(std::fs::File::open("card.yml")?)?;

    // missing entity is a setup-time error, never a silent default
    config_file
        .card
        .validate()
        .wrap_err("invalid card configuration")?;

    if std::env::var("TEST_CONFIG").is_ok() {
        return Ok(());
    }

    server::serve(config_file).await?;

    Ok(())
}
