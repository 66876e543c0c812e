use std::process::ExitCode;

use stock_manager::{Launch, StockManager, infrastructure::USAGE};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stock_manager=info,tower_http=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = match Launch::parse(std::env::args().skip(1)) {
        Ok(Launch::Serve(options)) => options,
        Ok(Launch::Help) => {
            print!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };
    let config = options.load_config()?;

    if options.in_memory {
        tracing::warn!(addr = %config.bind_addr(), "Serving from memory; rows are lost on exit");
        StockManager::in_memory(config).run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    match StockManager::connect(config).await {
        Ok(manager) => manager.run().await?,
        Err(e) => {
            tracing::error!(error = %e, "Database connection error");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
