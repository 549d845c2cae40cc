//! Lenient views of the JSON served by vgmdb.info.
//!
//! Every field is optional: the service omits keys freely, and the mapping
//! code decides which absences are fatal.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Language-keyed names, e.g. `{"ja": "…", "en": "…"}`. Keeps the order the
/// service sent them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedNames(Map<String, Value>);

impl LocalizedNames {
    /// Non-empty string stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(non_empty)
    }

    /// First non-empty string in insertion order.
    pub fn first(&self) -> Option<&str> {
        self.0.values().find_map(non_empty)
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedNames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }
}

fn non_empty(v: &Value) -> Option<&str> {
    v.as_str().filter(|s| !s.trim().is_empty())
}

/// `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /album/{id}` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAlbum {
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub names: LocalizedNames,
    pub link: Option<String>,
    pub catalog: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub performers: Vec<RawArtist>,
    #[serde(deserialize_with = "null_as_default")]
    pub organizations: Vec<RawArtist>,
    #[serde(deserialize_with = "null_as_default")]
    pub composers: Vec<RawArtist>,
    pub discs: Option<Vec<RawDisc>>,
    pub release_date: Option<String>,
    pub publisher: Option<RawArtist>,
    pub media_format: Option<String>,
    pub vgmdb_link: Option<String>,
}

/// Performer, organization, composer or publisher entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawArtist {
    pub link: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub names: LocalizedNames,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDisc {
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tracks: Vec<RawTrack>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTrack {
    #[serde(deserialize_with = "null_as_default")]
    pub names: LocalizedNames,
    pub track_length: Option<String>,
}

/// `GET /search/albums/{query}` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub results: SearchResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    #[serde(deserialize_with = "null_as_default")]
    pub albums: Vec<SearchHit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    pub link: Option<String>,
}

/// Trailing segment of a service link: `"album/79"` -> `"79"`.
pub fn link_id(link: &str) -> Option<&str> {
    link.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
}
