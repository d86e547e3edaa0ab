use dotenv::dotenv;
use log::debug;

mod config;
mod db;
mod error;

use error::Error;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if exists)
    dotenv().ok();
    env_logger::init();

    println!("Connecting to MongoDB...");

    match run().await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            println!("Connection failed ✗");
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<(), Error> {
    let config = config::Config::from_env()?;

    let handle = db::connect(&config).await?;
    handle.ping().await?;
    println!("Connected to MongoDB ✓");

    let server = handle
        .server_address()
        .unwrap_or_else(|| "unknown".to_string());
    println!("Server: {}", server);

    handle.close().await;
    println!("Connection closed ✓");
    debug!("exiting with success");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_fails_without_a_uri() {
        let result = temp_env::async_with_vars(
            [("MONGO_URI", None::<&str>)],
            run(),
        )
        .await;
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
