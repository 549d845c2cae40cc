//! Blocking client for the vgmdb.info JSON API.

use serde::de::DeserializeOwned;

use crate::config::DEFAULT_BASE_URL;
use crate::error::LookupError;
use crate::query;
use crate::raw::{RawAlbum, SearchResponse};

pub struct VgmdbClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl VgmdbClient {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("vgmdb-lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;
        let base_url = match base_url.trim().trim_end_matches('/') {
            "" => DEFAULT_BASE_URL.to_string(),
            url => url.to_string(),
        };
        Ok(Self { http, base_url })
    }

    /// `GET /search/albums/{query}`. `query` should already be sanitized.
    pub fn search_albums(&self, query: &str) -> Result<SearchResponse, LookupError> {
        self.get_json(&format!("/search/albums/{}", query::encode(query)))
    }

    /// `GET /album/{id}`.
    pub fn album(&self, id: &str) -> Result<RawAlbum, LookupError> {
        self.get_json(&format!("/album/{}", urlencoding::encode(id)))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LookupError> {
        let url = format!("{}{}?format=json", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| LookupError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| LookupError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
