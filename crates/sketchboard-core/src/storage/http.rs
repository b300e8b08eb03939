//! Collection served by a remote drawings API.

use super::{
    BoxFuture, CollectionSink, CollectionSource, SourceError, SourceResult, check_appendable,
};
use crate::document::{Drawing, ID_FIELD};
use crate::shapes::Shape;
use reqwest::StatusCode;
use serde::Deserialize;

/// Path of the drawings resource below the base URL.
pub const DRAWINGS_PATH: &str = "/api/drawings";

/// Client for `GET`/`POST {base}/api/drawings`.
#[derive(Clone)]
pub struct HttpCollection {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct Created {
    #[serde(rename = "_id")]
    id: String,
}

impl HttpCollection {
    /// Client for the service at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), DRAWINGS_PATH),
        })
    }

    /// Full URL of the drawings resource.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn check_status(status: StatusCode, endpoint: &str) -> SourceResult<()> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(SourceError::NotFound(endpoint.to_string())),
        s => Err(SourceError::Http(format!("{} returned {}", endpoint, s))),
    }
}

impl CollectionSource for HttpCollection {
    fn fetch_all(&self) -> BoxFuture<'_, SourceResult<Vec<Drawing>>> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.endpoint)
                .send()
                .await
                .map_err(|e| SourceError::Http(e.to_string()))?;
            check_status(response.status(), &self.endpoint)?;

            let body = response
                .bytes()
                .await
                .map_err(|e| SourceError::Http(e.to_string()))?;
            serde_json::from_slice(&body).map_err(|e| SourceError::Serialization(e.to_string()))
        })
    }
}

impl CollectionSink for HttpCollection {
    fn append(&self, shape: &Shape) -> BoxFuture<'_, SourceResult<String>> {
        let shape = shape.clone();
        Box::pin(async move {
            check_appendable(&shape)?;
            let record = shape
                .to_value()
                .map_err(|e| SourceError::Serialization(e.to_string()))?;

            let response = self
                .client
                .post(&self.endpoint)
                .json(&record)
                .send()
                .await
                .map_err(|e| SourceError::Http(e.to_string()))?;
            check_status(response.status(), &self.endpoint)?;

            let created: Created = response.json().await.map_err(|e| {
                SourceError::Serialization(format!("Missing `{}` in response: {}", ID_FIELD, e))
            })?;
            Ok(created.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let store = HttpCollection::new("http://localhost:3000/").unwrap();
        assert_eq!(store.endpoint(), "http://localhost:3000/api/drawings");
    }

    #[test]
    fn test_status_mapping() {
        assert!(check_status(StatusCode::OK, "x").is_ok());
        assert!(check_status(StatusCode::CREATED, "x").is_ok());
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND, "x"),
            Err(SourceError::NotFound(_))
        ));
        assert!(matches!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR, "x"),
            Err(SourceError::Http(_))
        ));
    }
}
