//! VGMdb source against a mock vgmdb.info.
//!
//! The source uses a blocking HTTP client, so it is built, used and dropped
//! inside `spawn_blocking`.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use vgmdb_lookup_core::config::VgmdbConfig;
use vgmdb_lookup_core::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record(id: u64, title: &str) -> Value {
    json!({
        "link": format!("album/{}", id),
        "name": title,
        "names": {"ja": format!("{}（日本語）", title), "en": title},
        "catalog": format!("CAT-{}", id),
        "performers": [{"link": "artist/10", "names": {"en": "Singer"}}],
        "discs": [
            {"tracks": [
                {"names": {"English": "One"}, "track_length": "1:00"},
                {"names": {"English": "Two"}, "track_length": "2:00"},
                {"names": {"English": "Three"}, "track_length": "Unknown"}
            ]},
            {"tracks": [
                {"names": {"English": "Four"}, "track_length": "0:30.5"},
                {"names": {"English": "Five"}, "track_length": "10:00"}
            ]}
        ],
        "release_date": "2003-11-26",
        "publisher": {"names": {"en": "Label"}},
        "media_format": "2 CD",
        "vgmdb_link": format!("https://vgmdb.net/album/{}", id)
    })
}

fn config(server: &MockServer, langs: &str) -> VgmdbConfig {
    VgmdbConfig {
        base_url: server.uri(),
        lang_priority: langs.to_string(),
        ..Default::default()
    }
}

async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("blocking task panicked")
}

async fn mount_album(server: &MockServer, id: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/album/{}", id)))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn album_for_id_normalizes_record() {
    let server = MockServer::start().await;
    mount_album(&server, 1234, record(1234, "A Song")).await;

    let cfg = config(&server, "en, ja");
    let album = blocking(move || VgmdbSource::new(&cfg).unwrap().album_for_id("1234"))
        .await
        .unwrap()
        .expect("album");

    assert_eq!(album.album, "A Song");
    assert_eq!(album.album_id, 1234);
    assert_eq!(album.artist, "Singer");
    assert_eq!(album.artist_id.as_deref(), Some("10"));
    assert_eq!((album.year, album.month, album.day), (Some(2003), Some(11), Some(26)));
    assert_eq!(album.label.as_deref(), Some("Label"));
    assert_eq!(album.mediums, 2);
    assert_eq!(
        album.tracks.iter().map(|t| t.index).collect::<Vec<_>>(),
        [1, 2, 3, 4, 5]
    );
    assert_eq!(
        album.tracks.iter().map(|t| t.medium).collect::<Vec<_>>(),
        [1, 1, 1, 2, 2]
    );
    assert_eq!(album.tracks[3].length, 30.5);
}

#[tokio::test]
async fn namespaced_id_matches_bare_id() {
    let server = MockServer::start().await;
    mount_album(&server, 1234, record(1234, "A Song")).await;

    let cfg = config(&server, "ja, en");
    let (bare, namespaced) = blocking(move || {
        let source = VgmdbSource::new(&cfg).unwrap();
        (
            source.album_for_id("1234").unwrap(),
            source.album_for_id("vgmdb:1234").unwrap(),
        )
    })
    .await;

    assert!(bare.is_some());
    assert_eq!(bare, namespaced);
    assert_eq!(bare.unwrap().album, "A Song（日本語）");
}

#[tokio::test]
async fn foreign_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record(1234, "A Song")))
        .expect(0)
        .mount(&server)
        .await;

    let cfg = config(&server, "en");
    let album = blocking(move || VgmdbSource::new(&cfg).unwrap().album_for_id("othersource:1234")).await;
    assert!(album.unwrap().is_none());
}

#[tokio::test]
async fn album_for_id_not_json_or_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/album/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/album/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let cfg = config(&server, "en");
    let (garbled, missing) = blocking(move || {
        let source = VgmdbSource::new(&cfg).unwrap();
        (source.album_for_id("1").unwrap(), source.album_for_id("2").unwrap())
    })
    .await;
    assert!(garbled.is_none());
    assert!(missing.is_none());
}

#[tokio::test]
async fn broken_record_is_a_normalize_error() {
    let server = MockServer::start().await;
    let mut body = record(7, "No Discs");
    body["discs"] = json!([]);
    mount_album(&server, 7, body).await;

    let cfg = config(&server, "en");
    let result = blocking(move || VgmdbSource::new(&cfg).unwrap().album_for_id("7")).await;
    assert!(matches!(result, Err(NormalizeError::NoDiscs)));
}

#[tokio::test]
async fn search_sanitizes_and_fans_out_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/albums/Final%20Fantasy%20VII"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {"albums": [
                {"link": "album/20"},
                {"link": "album/10"},
                {"link": "album/30"},
                {"title": "no link"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_album(&server, 20, record(20, "Second Press")).await;
    mount_album(&server, 10, record(10, "First Press")).await;
    Mock::given(method("GET"))
        .and(path("/album/30"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let cfg = config(&server, "en");
    let albums = blocking(move || {
        VgmdbSource::new(&cfg)
            .unwrap()
            .candidates(&AlbumQuery {
                artist: "Nobuo Uematsu".to_string(),
                album: "Final Fantasy VII - CD1".to_string(),
                va_likely: false,
            })
    })
    .await;

    let ids: Vec<u64> = albums.iter().map(|a| a.album_id).collect();
    assert_eq!(ids, [20, 10]);
    assert_eq!(albums[1].album, "First Press");
}

#[tokio::test]
async fn search_skips_records_that_fail_to_normalize() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/albums/Chrono%20Cross"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {"albums": [{"link": "/album/1"}, {"link": "/album/2"}]}
        })))
        .mount(&server)
        .await;
    let mut broken = record(1, "Broken");
    broken["performers"] = json!([]);
    mount_album(&server, 1, broken).await;
    mount_album(&server, 2, record(2, "Chrono Cross OST")).await;

    let cfg = config(&server, "en");
    let albums = blocking(move || VgmdbSource::new(&cfg).unwrap().search("Chrono Cross!", true)).await;
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].album, "Chrono Cross OST");
}

#[tokio::test]
async fn search_failure_yields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let cfg = config(&server, "en");
    let albums = blocking(move || VgmdbSource::new(&cfg).unwrap().search("Xenogears", false)).await;
    assert!(albums.is_empty());
}

#[tokio::test]
async fn empty_query_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let cfg = config(&server, "en");
    let albums = blocking(move || VgmdbSource::new(&cfg).unwrap().search(" - CD2 !", false)).await;
    assert!(albums.is_empty());
}

#[test]
fn transport_failure_yields_empty() {
    let source = VgmdbSource::new(&VgmdbConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert!(source.search("Final Fantasy VII", false).is_empty());
}
