//! Album and track records handed to the tagger, plus the distance signal
//! used to rank candidates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One release candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumInfo {
    pub album: String,
    pub album_id: u64,
    pub artist: String,
    pub artist_id: Option<String>,
    pub tracks: Vec<TrackInfo>,
    /// Various-artists release.
    pub va: bool,
    pub catalognum: Option<String>,
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub label: Option<String>,
    /// Number of discs.
    pub mediums: u32,
    pub media: Option<String>,
    pub data_source: String,
    pub data_url: Option<String>,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub title: String,
    /// Position across the whole release, starting at 1.
    pub index: u32,
    /// Seconds; 0.0 when unknown.
    pub length: f64,
    pub medium: u32,
    pub medium_index: u32,
    pub medium_total: u32,
}

/// Named penalties contributed to a candidate's distance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distance {
    penalties: BTreeMap<String, Vec<f64>>,
}

impl Distance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, value: f64) {
        self.penalties.entry(key.to_string()).or_default().push(value);
    }

    /// Sum of the penalties recorded under `key`.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.penalties.get(key).map(|v| v.iter().sum())
    }

    pub fn total(&self) -> f64 {
        self.penalties.values().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.penalties.is_empty()
    }
}
