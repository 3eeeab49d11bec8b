use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use redis::RedisError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("You chose the wrong option")]
    UnknownOption,

    #[error("Cannot fetch votes")]
    FetchVotes(#[source] RedisError),

    #[error("There is error in submitting vote.")]
    SubmitVote(#[source] RedisError),
}

/// Response body for acknowledgements and errors alike: `{"message": ...}`.
#[derive(Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownOption => StatusCode::BAD_REQUEST,
            AppError::FetchVotes(e) => {
                error!("Failed to read tallies: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::SubmitVote(e) => {
                error!("Failed to record vote: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(Message::new(&self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_error() -> RedisError {
        RedisError::from(std::io::Error::other("connection refused"))
    }

    #[test]
    fn test_unknown_option_is_bad_request() {
        let response = AppError::UnknownOption.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_failures_are_internal_errors() {
        let fetch = AppError::FetchVotes(store_error()).into_response();
        let submit = AppError::SubmitVote(store_error()).into_response();

        assert_eq!(fetch.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(submit.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_facing_messages() {
        assert_eq!(
            AppError::UnknownOption.to_string(),
            "You chose the wrong option"
        );
        assert_eq!(
            AppError::FetchVotes(store_error()).to_string(),
            "Cannot fetch votes"
        );
        assert_eq!(
            AppError::SubmitVote(store_error()).to_string(),
            "There is error in submitting vote."
        );
    }
}
