//! Mapping of a raw VGMdb album record into [`AlbumInfo`].

use crate::error::NormalizeError;
use crate::info::{AlbumInfo, TrackInfo};
use crate::lang::LangPriority;
use crate::raw::{link_id, RawAlbum, RawArtist};

pub const DATA_SOURCE: &str = "VGMdb";
pub const SCRIPT: &str = "utf-8";

const UNKNOWN_LENGTH: &str = "Unknown";

/// Credit list an album's artist is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistRole {
    /// Only when the album credits exactly one performer.
    Performers,
    Organizations,
    Composers,
}

/// Tried in order; the first role that applies wins.
pub const ARTIST_PRECEDENCE: [ArtistRole; 3] = [
    ArtistRole::Performers,
    ArtistRole::Organizations,
    ArtistRole::Composers,
];

impl ArtistRole {
    pub fn select(self, album: &RawAlbum) -> Option<&[RawArtist]> {
        let credits = match self {
            ArtistRole::Performers if album.performers.len() == 1 => &album.performers,
            ArtistRole::Performers => return None,
            ArtistRole::Organizations => &album.organizations,
            ArtistRole::Composers => &album.composers,
        };
        (!credits.is_empty()).then_some(credits.as_slice())
    }
}

/// Role whose credits name the album artist.
pub fn artist_role(album: &RawAlbum) -> Option<ArtistRole> {
    ARTIST_PRECEDENCE
        .into_iter()
        .find(|role| role.select(album).is_some())
}

/// Seconds in a `"M:SS"` or `"H:MM:SS"` length. `"Unknown"` is zero;
/// anything else unparseable is `None`.
pub fn parse_duration(length: &str) -> Option<f64> {
    let length = length.trim();
    if length.eq_ignore_ascii_case(UNKNOWN_LENGTH) {
        return Some(0.0);
    }
    let parts: Vec<&str> = length.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }
    parts.iter().try_fold(0.0, |acc, part| {
        let value: f64 = part.trim().parse().ok()?;
        (value.is_finite() && value >= 0.0).then_some(acc * 60.0 + value)
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseDate {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// `"YYYY-MM-DD"`, tolerating `"YYYY-MM"` and `"YYYY"`.
pub fn parse_release_date(date: &str) -> ReleaseDate {
    let mut parts = date.trim().splitn(3, '-').map(|p| p.trim().parse::<u32>().ok());
    let year = parts.next().flatten();
    let month = parts.next().flatten().filter(|m| (1..=12).contains(m));
    let day = parts.next().flatten().filter(|d| (1..=31).contains(d));
    ReleaseDate { year, month, day }
}

fn artist_name(artist: &RawArtist, langs: &LangPriority) -> Option<String> {
    langs
        .resolve(&artist.names)
        .or_else(|| artist.name.as_deref().filter(|n| !n.trim().is_empty()))
        .map(String::from)
}

/// Build the album record. Fails only on data no fallback can cover:
/// no album id, no title, no discs, or no credited artist.
pub fn normalize(album: &RawAlbum, langs: &LangPriority) -> Result<AlbumInfo, NormalizeError> {
    let link = album.link.as_deref().ok_or(NormalizeError::MissingField("link"))?;
    let album_id = link_id(link)
        .and_then(|id| id.parse::<u64>().ok())
        .ok_or_else(|| NormalizeError::InvalidField {
            field: "link",
            value: link.to_string(),
        })?;

    let title = langs
        .preferred(&album.names)
        .or_else(|| album.name.as_deref().filter(|n| !n.trim().is_empty()))
        .or_else(|| album.names.first())
        .ok_or_else(|| NormalizeError::EmptyNames("album".to_string()))?
        .to_string();

    let lead = artist_role(album)
        .and_then(|role| role.select(album))
        .and_then(|credits| credits.first())
        .ok_or(NormalizeError::NoArtists)?;
    let artist = artist_name(lead, langs).ok_or_else(|| NormalizeError::EmptyNames("artist".to_string()))?;
    let artist_id = lead.link.as_deref().and_then(link_id).map(String::from);

    let discs = album.discs.as_deref().ok_or(NormalizeError::MissingField("discs"))?;
    if discs.is_empty() {
        return Err(NormalizeError::NoDiscs);
    }
    let mediums = discs.len() as u32;

    let mut tracks = Vec::new();
    let mut index = 0u32;
    for (disc_index, disc) in discs.iter().enumerate() {
        for (track_index, track) in disc.tracks.iter().enumerate() {
            index += 1;
            let title = langs
                .resolve(&track.names)
                .ok_or_else(|| NormalizeError::EmptyNames(format!("track {}", index)))?
                .to_string();
            let length = match track.track_length.as_deref() {
                Some(raw) => parse_duration(raw).unwrap_or_else(|| {
                    tracing::warn!(
                        "Unparseable length {:?} for track {} of album {}",
                        raw,
                        index,
                        album_id
                    );
                    0.0
                }),
                None => 0.0,
            };
            tracks.push(TrackInfo {
                title,
                index,
                length,
                medium: disc_index as u32 + 1,
                medium_index: track_index as u32 + 1,
                medium_total: mediums,
            });
        }
    }

    let date = album
        .release_date
        .as_deref()
        .map(parse_release_date)
        .unwrap_or_default();

    let label = album.publisher.as_ref().and_then(|p| artist_name(p, langs));

    let catalognum = album
        .catalog
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("N/A"))
        .map(String::from);

    tracing::debug!("Normalized VGMdb album {} ({} tracks)", album_id, tracks.len());

    Ok(AlbumInfo {
        album: title,
        album_id,
        artist,
        artist_id,
        tracks,
        va: false,
        catalognum,
        year: date.year,
        month: date.month,
        day: date.day,
        label,
        mediums,
        media: album.media_format.clone(),
        data_source: DATA_SOURCE.to_string(),
        data_url: album.vgmdb_link.clone(),
        script: SCRIPT.to_string(),
    })
}
