//! Metadata lookup via pluggable sources. VGMdb is the only one implemented.

pub mod client;
pub mod vgmdb;

use crate::error::NormalizeError;
use crate::info::{AlbumInfo, Distance};

/// What a tagger asks a metadata source for.
pub trait MetadataSource: Send + Sync {
    fn name(&self) -> &str;

    /// Candidate albums for the files being tagged. Remote failures yield an
    /// empty list.
    fn candidates(&self, query: &AlbumQuery) -> Vec<AlbumInfo>;

    /// Album by id, optionally namespaced as `"<source>:<id>"`. `Ok(None)` when
    /// the id belongs to another source or the album could not be fetched.
    fn album_for_id(&self, album_id: &str) -> Result<Option<AlbumInfo>, NormalizeError>;

    /// This source's contribution to a candidate's distance.
    fn album_distance(&self, album: &AlbumInfo) -> Distance;
}

#[derive(Debug, Clone, Default)]
pub struct AlbumQuery {
    pub artist: String,
    pub album: String,
    /// Various-artists release likely. Advisory; sources may ignore it.
    pub va_likely: bool,
}

/// Split `"vgmdb:79"` into `(Some("vgmdb"), "79")`; bare ids have no namespace.
pub fn split_namespaced_id(id: &str) -> (Option<&str>, &str) {
    match id.split_once(':') {
        Some((namespace, rest)) => (Some(namespace.trim()), rest.trim()),
        None => (None, id.trim()),
    }
}
