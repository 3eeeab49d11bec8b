use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::{
    database::{fetch_tallies, increment_count},
    error::{AppError, Message},
    options::is_valid_option,
    state::AppState,
};

#[derive(Deserialize)]
pub struct VoteRequest {
    pub option: String,
}

/// `GET /api/votes`: the tally mapping for every option.
pub async fn votes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HashMap<String, u32>>, AppError> {
    let mut connection = state.redis_connection.clone();

    let tallies = fetch_tallies(&mut connection)
        .await
        .map_err(AppError::FetchVotes)?;

    Ok(Json(tallies))
}

/// `POST /api/vote`: one atomic increment for an allow-listed option.
///
/// The allow-list check runs before any store access, so a rejected request
/// can never mutate a tally. A body that does not decode to `{option}` is
/// treated the same as an unknown option.
pub async fn vote_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<Message>, AppError> {
    let Ok(Json(payload)) = payload else {
        return Err(AppError::UnknownOption);
    };

    if !is_valid_option(&payload.option) {
        return Err(AppError::UnknownOption);
    }

    let mut connection = state.redis_connection.clone();

    increment_count(&mut connection, &payload.option)
        .await
        .map_err(AppError::SubmitVote)?;

    Ok(Json(Message::new("Your vote is successfully submitted")))
}
