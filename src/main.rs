mod config;
mod constants;
mod error;
mod handlers;
mod response;
mod server;

#[cfg(test)]
mod test_utils;

use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

#[tokio::main]
async fn main() {
    config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(err) = server::run().await {
        tracing::error!("Error: {:#}", err);
        std::process::exit(1);
    }
}
