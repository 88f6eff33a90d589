#![deny(warnings)]
#![deny(rust_2018_idioms)]

use tracing::{Level, info};
use web_api::{settings::Settings, startup::App};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::new()?;

    tracing_subscriber::fmt()
        .with_max_level(Level::from(&settings.log_level))
        .init();

    let app = App::build(&settings)?;

    info!(
        "starting pickleplay-api in {} on port {}",
        settings.environment,
        app.port()
    );

    app.run().await?;

    Ok(())
}
