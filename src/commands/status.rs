use crate::libs::config::Config;
use crate::libs::controller::TaskController;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd(controller: &TaskController, config: &Config) -> Result<()> {
    let database = &config.database;
    msg_info!(Message::BackendInUse(controller.tasks().backend().to_string()));
    msg_print!(Message::ConfigSummary {
        uri: database.uri.clone(),
        database: database.database.clone(),
        collection: database.collection.clone(),
        timeout_ms: database.timeout_ms,
    });

    Ok(())
}
