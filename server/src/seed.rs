//! Startup seeding of the option records.

use redis::{RedisError, aio::ConnectionManager};
use tracing::{error, info};

use crate::{
    database::{insert_initial, is_empty},
    options::VOTING_OPTIONS,
};

/// Populates the store with every allowed option at count zero, once, the
/// first time the process sees an empty store.
///
/// A failure here leaves the service running against an empty option set
/// rather than killing the process. `GET /api/votes` then returns an empty
/// mapping until the store comes back and the process is restarted.
pub async fn seed_options(connection: &mut ConnectionManager) {
    match try_seed(connection).await {
        Ok(true) => info!("Database is ready with {} voting options", VOTING_OPTIONS.len()),
        Ok(false) => info!("Voting options already present, skipping seed"),
        Err(e) => error!("Error in database initialisation: {e}"),
    }
}

async fn try_seed(connection: &mut ConnectionManager) -> Result<bool, RedisError> {
    if !is_empty(connection).await? {
        return Ok(false);
    }

    insert_initial(connection, &VOTING_OPTIONS).await?;

    Ok(true)
}
