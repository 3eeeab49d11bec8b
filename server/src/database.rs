//! # Redis
//!
//! RAM database.
//!
//! Core purpose is to store and look up vote tallies. Also, used for atomic increments.
//!
//! ## Requirements
//!
//! - Fast lookups
//! - Tiny dataset: one option-int pair per allowed option
//! - Concurrent voters must never lose an update
//!
//! ## Implementation
//!
//! - Redis hash: 1 big key (`votes`), then option-count pairs
//! - Compact pairs and fast lookups
//! - For options: string + 32-bit **count** int
//! - Atomic operations, Redis loads operations into a queue
//! - `HINCRBY` assumes 0 if the field does not exist, so an increment on a
//!   missing option creates it; the allow-list check in front of the store
//!   keeps out-of-set fields from ever appearing
//! - `HSETNX` during seeding only creates absent fields, so two processes
//!   racing on first start cannot duplicate or clobber a record
use std::{collections::HashMap, time::Duration};

use redis::{
    AsyncCommands, Client, RedisError,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

pub const VOTES_KEY: &str = "votes";

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();
    let connection_manager = client
        .get_connection_manager_with_config(config)
        .await
        .unwrap();

    connection_manager
}

pub async fn fetch_tallies(
    connection: &mut ConnectionManager,
) -> Result<HashMap<String, u32>, RedisError> {
    connection.hgetall(VOTES_KEY).await
}

pub async fn increment_count(
    connection: &mut ConnectionManager,
    option: &str,
) -> Result<(), RedisError> {
    let _: u32 = connection.hincr(VOTES_KEY, option, 1).await?;

    Ok(())
}

pub async fn is_empty(connection: &mut ConnectionManager) -> Result<bool, RedisError> {
    let len: u64 = connection.hlen(VOTES_KEY).await?;

    Ok(len == 0)
}

pub async fn insert_initial(
    connection: &mut ConnectionManager,
    options: &[&str],
) -> Result<(), RedisError> {
    for option in options {
        let _: bool = connection.hset_nx(VOTES_KEY, *option, 0).await?;
    }

    Ok(())
}
