//! Startup connectivity check for the MongoDB backend.
//!
//! The probe runs exactly once, when the application wires up its
//! [`Tasks`](super::tasks::Tasks) instance. It opens a client with a bounded
//! server-selection timeout and pings the configured database. Whatever the
//! outcome, one status line is printed and the result is never revisited:
//! there is no reconnection and no later health check.

use super::mongo::MongoStore;
use super::Result;
use crate::libs::config::DatabaseConfig;
use crate::libs::data_storage::APP_NAME;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::sync::Client;

/// Connects and pings, returning a store bound to the configured collection.
///
/// Parse errors in the connection string, refused connections and timeouts
/// all surface as `Err`.
pub fn connect(config: &DatabaseConfig) -> Result<MongoStore> {
    let timeout = config.timeout();
    let mut options = ClientOptions::parse(config.uri.as_str()).run()?;
    options.server_selection_timeout = Some(timeout);
    options.connect_timeout = Some(timeout);
    options.app_name = Some(APP_NAME.to_string());

    let client = Client::with_options(options)?;
    let database = client.database(&config.database);
    database.run_command(doc! { "ping": 1 }).run()?;

    Ok(MongoStore::new(database.collection(&config.collection)))
}

/// Runs [`connect`] and reports the outcome once.
pub fn probe(config: &DatabaseConfig) -> Result<MongoStore> {
    tracing::debug!(database = %config.database, timeout_ms = config.timeout_ms, "probing database");

    match connect(config) {
        Ok(store) => {
            tracing::info!(database = %config.database, collection = %config.collection, "database reachable");
            msg_success!(Message::DatabaseConnected {
                database: config.database.clone(),
                collection: config.collection.clone(),
            });
            Ok(store)
        }
        Err(err) => {
            tracing::warn!(error = %err, "database unreachable, using in-memory storage");
            msg_warning!(Message::DatabaseUnavailable(err.to_string()));
            Err(err)
        }
    }
}
