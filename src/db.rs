use std::time::Duration;

use log::debug;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerAddress};
use mongodb::Client;

use crate::config::Config;
use crate::error::Error;

/// An open session to a MongoDB deployment. The driver does not expose its
/// options after construction, so the resolved host list is kept alongside
/// the client for address reporting.
pub struct MongoHandle {
    client: Client,
    hosts: Vec<ServerAddress>,
}

/// Build a client from the configured URI. Construction is lazy: no network
/// I/O happens until the handle is first used.
pub async fn connect(config: &Config) -> Result<MongoHandle, Error> {
    let mut client_options = ClientOptions::parse(&config.mongo_uri).await?;
    client_options.app_name = Some(config.app_name.clone());
    // A diagnostic should fail fast instead of waiting out the driver's
    // 30 second default.
    client_options.connect_timeout = Some(Duration::from_secs(3));
    client_options.server_selection_timeout = Some(Duration::from_secs(3));
    let hosts = client_options.hosts.clone();
    debug!("configured hosts: {:?}", hosts);
    let client = Client::with_options(client_options)?;
    Ok(MongoHandle { client, hosts })
}

impl MongoHandle {
    /// Run `{ ping: 1 }` against the admin database.
    pub async fn ping(&self) -> Result<(), Error> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    /// Address of the first configured server, if any.
    pub fn server_address(&self) -> Option<String> {
        self.hosts.first().map(|host| host.to_string())
    }

    /// Shut the client down. Consuming `self` means the handle cannot be
    /// used after release.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
