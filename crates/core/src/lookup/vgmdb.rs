//! VGMdb metadata source.
//!
//! Searches fan out sequentially: every search hit is fetched and normalized
//! on its own before the next one is requested.

use crate::config::VgmdbConfig;
use crate::error::{LookupError, NormalizeError};
use crate::info::{AlbumInfo, Distance};
use crate::lang::LangPriority;
use crate::lookup::client::VgmdbClient;
use crate::lookup::{split_namespaced_id, AlbumQuery, MetadataSource};
use crate::normalize::{normalize, DATA_SOURCE};
use crate::query;
use crate::raw::link_id;

/// Namespace accepted in `"vgmdb:<id>"` album ids.
pub const ID_NAMESPACE: &str = "vgmdb";

pub struct VgmdbSource {
    client: VgmdbClient,
    langs: LangPriority,
    source_weight: f64,
}

impl VgmdbSource {
    pub fn new(config: &VgmdbConfig) -> Result<Self, LookupError> {
        Ok(Self {
            client: VgmdbClient::new(&config.base_url)?,
            langs: config.lang_priority(),
            source_weight: config.source_weight,
        })
    }

    /// Albums matching free-text `query`, in the order the service ranked
    /// them. Never fails: remote errors and broken records are logged and
    /// dropped.
    pub fn search(&self, query: &str, _va_likely: bool) -> Vec<AlbumInfo> {
        let sanitized = query::sanitize(query);
        if sanitized.is_empty() {
            tracing::debug!("Nothing left to search for in {:?}", query);
            return Vec::new();
        }
        tracing::debug!("Searching VGMdb for {:?}", sanitized);

        let response = match self.client.search_albums(&sanitized) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("VGMdb search failed (query: {}): {}", sanitized, e);
                return Vec::new();
            }
        };

        let mut albums = Vec::new();
        for hit in &response.results.albums {
            let Some(id) = hit.link.as_deref().and_then(link_id) else {
                tracing::warn!("Skipping search result without album link");
                continue;
            };
            match self.album_for_id(id) {
                Ok(Some(album)) => albums.push(album),
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping VGMdb album {}: {}", id, e),
            }
        }
        albums
    }

    /// Album by bare or `vgmdb:`-namespaced id.
    pub fn album_for_id(&self, album_id: &str) -> Result<Option<AlbumInfo>, NormalizeError> {
        let id = match own_id(album_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("{}", e);
                return Ok(None);
            }
        };
        tracing::debug!("Querying VGMdb for release {}", id);

        match self.client.album(id) {
            Ok(raw) => normalize(&raw, &self.langs).map(Some),
            Err(e) => {
                tracing::warn!("VGMdb lookup failed (id: {}): {}", id, e);
                Ok(None)
            }
        }
    }

    /// A `source` penalty of the configured weight for VGMdb candidates,
    /// nothing for anyone else's.
    pub fn album_distance(&self, album: &AlbumInfo) -> Distance {
        let mut dist = Distance::new();
        if album.data_source == DATA_SOURCE {
            dist.add("source", self.source_weight);
        }
        dist
    }
}

/// Strip a `vgmdb:` namespace; any other namespace is someone else's id.
fn own_id(album_id: &str) -> Result<&str, LookupError> {
    match split_namespaced_id(album_id) {
        (Some(ns), id) if ns.eq_ignore_ascii_case(ID_NAMESPACE) => Ok(id),
        (Some(ns), id) => Err(LookupError::ProviderMismatch {
            provider: ns.to_string(),
            id: id.to_string(),
        }),
        (None, id) => Ok(id),
    }
}

impl MetadataSource for VgmdbSource {
    fn name(&self) -> &str {
        DATA_SOURCE
    }

    /// The service matches album titles, so only the album is searched for.
    fn candidates(&self, query: &AlbumQuery) -> Vec<AlbumInfo> {
        self.search(&query.album, query.va_likely)
    }

    fn album_for_id(&self, album_id: &str) -> Result<Option<AlbumInfo>, NormalizeError> {
        VgmdbSource::album_for_id(self, album_id)
    }

    fn album_distance(&self, album: &AlbumInfo) -> Distance {
        VgmdbSource::album_distance(self, album)
    }
}
