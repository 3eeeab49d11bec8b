use std::collections::HashMap;

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde_json::{Value, json};

pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            http: Client::new(),
        }
    }

    pub async fn fetch_votes(&self) -> Result<HashMap<String, u32>> {
        let response = self
            .http
            .get(format!("{}/votes", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Submits one vote and returns the server's acknowledgement message.
    /// Rejections (unknown option, store failure) surface the server's
    /// `message` body as the error.
    pub async fn submit_vote(&self, option: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/vote", self.base_url))
            .json(&json!({ "option": option }))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        let message = body["message"].as_str().unwrap_or_default().to_string();

        if !status.is_success() {
            return Err(anyhow!(message));
        }

        Ok(message)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn test_trailing_slashes_are_stripped() {
        assert_eq!(
            normalize_base_url("http://localhost:3001/api/"),
            "http://localhost:3001/api"
        );
        assert_eq!(
            normalize_base_url("http://localhost:3001/api"),
            "http://localhost:3001/api"
        );
    }
}
