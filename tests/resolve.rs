//! Integration tests for version resolution against mock metadata endpoints.
//!
//! The strategies stay blocking; wiremock just needs a tokio runtime to host
//! the mock server.

use mcjar::resolve::{ForgeStrategy, VanillaStrategy};
use mcjar::{ChecksumAlgorithm, Error, FetchOptions, Outcome, ResolutionStrategy};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quiet_opts() -> FetchOptions {
    FetchOptions {
        quiet: true,
        ..FetchOptions::default()
    }
}

fn vanilla(server: &MockServer) -> VanillaStrategy {
    VanillaStrategy::with_manifest_url(format!("{}/manifest.json", server.uri()), quiet_opts())
}

fn forge(server: &MockServer) -> ForgeStrategy {
    ForgeStrategy::with_bases(
        server.uri(),
        "https://maven.example/net/minecraftforge/forge",
        quiet_opts(),
    )
}

async fn mount_manifest(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latest": {"release": "1.18.2", "snapshot": "22w11a"},
            "versions": [
                {"id": "22w11a", "url": format!("{}/meta/22w11a.json", server.uri())},
                {"id": "1.18.2", "url": format!("{}/meta/1.18.2.json", server.uri())},
                {"id": "1.18.1", "url": format!("{}/meta/1.18.1.json", server.uri())}
            ]
        })))
        .mount(server)
        .await;
}

// =============================================================================
// Vanilla strategy
// =============================================================================

#[tokio::test]
async fn test_resolve_release_to_server_jar() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;

    Mock::given(method("GET"))
        .and(path("/meta/1.18.2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloads": {
                "server": {
                    "url": "https://example/server.jar",
                    "sha1": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
                }
            }
        })))
        .mount(&server)
        .await;

    let outcome = vanilla(&server).resolve("1.18.2").unwrap();
    let Outcome::Target(target) = outcome else {
        panic!("expected a download target");
    };
    assert_eq!(target.url, "https://example/server.jar");
    assert_eq!(
        target.checksum.as_deref(),
        Some("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
    );
    assert_eq!(target.algorithm, ChecksumAlgorithm::Sha1);
    assert_eq!(target.file_name, "server.jar");
}

#[tokio::test]
async fn test_latest_substitutes_release_pointer() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;

    Mock::given(method("GET"))
        .and(path("/meta/1.18.2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloads": {"server": {
                "url": "https://example/server.jar",
                "sha1": "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
            }}
        })))
        .mount(&server)
        .await;

    let outcome = vanilla(&server).resolve("latest").unwrap();
    let Outcome::Target(target) = outcome else {
        panic!("expected a download target");
    };
    assert_eq!(target.url, "https://example/server.jar");
}

#[tokio::test]
async fn test_latest_snapshot_substitutes_snapshot_pointer() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;

    Mock::given(method("GET"))
        .and(path("/meta/22w11a.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloads": {"server": {
                "url": "https://example/snapshot-server.jar",
                "sha1": "cccccccccccccccccccccccccccccccccccccccc"
            }}
        })))
        .mount(&server)
        .await;

    let outcome = vanilla(&server).resolve("latest-snapshot").unwrap();
    let Outcome::Target(target) = outcome else {
        panic!("expected a download target");
    };
    assert_eq!(target.url, "https://example/snapshot-server.jar");
}

#[tokio::test]
async fn test_unknown_version_makes_no_metadata_request() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;

    // No per-version metadata request may happen for an unknown id.
    Mock::given(method("GET"))
        .and(path("/meta/99.99.99.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = vanilla(&server).resolve("99.99.99").unwrap_err();
    assert!(matches!(err, Error::UnknownVersion(_)));
    assert!(err.to_string().contains("99.99.99"));
}

#[tokio::test]
async fn test_list_preserves_manifest_order() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;

    let outcome = vanilla(&server).resolve("list").unwrap();
    let Outcome::Listing(ids) = outcome else {
        panic!("expected a listing");
    };
    assert_eq!(ids, vec!["22w11a", "1.18.2", "1.18.1"]);
}

#[tokio::test]
async fn test_list_latest_emits_pointer_target() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;

    let strategy = vanilla(&server);

    let Outcome::Listing(ids) = strategy.resolve("list-latest").unwrap() else {
        panic!("expected a listing");
    };
    assert_eq!(ids, vec!["1.18.2"]);

    let Outcome::Listing(ids) = strategy.resolve("list-latest-snapshot").unwrap() else {
        panic!("expected a listing");
    };
    assert_eq!(ids, vec!["22w11a"]);
}

#[tokio::test]
async fn test_manifest_fetch_failure_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/manifest.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = vanilla(&server).resolve("1.18.2").unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn test_malformed_manifest_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = vanilla(&server).resolve("1.18.2").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_missing_server_download_is_field_not_found() {
    let server = MockServer::start().await;
    mount_manifest(&server).await;

    // Old versions publish only a client download.
    Mock::given(method("GET"))
        .and(path("/meta/1.18.1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloads": {"client": {"url": "https://example/client.jar"}}
        })))
        .mount(&server)
        .await;

    let err = vanilla(&server).resolve("1.18.1").unwrap_err();
    assert!(matches!(err, Error::FieldNotFound(_)));
}

// =============================================================================
// Forge strategy
// =============================================================================

#[tokio::test]
async fn test_forge_suffixed_promotion() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/promotions_slim.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homepage": "https://files.minecraftforge.net/",
            "promos": {"1.18.2-latest": "40.1.80"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.18.2-40.1.80/meta.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classifiers": {"installer": {"jar": "dddddddddddddddddddddddddddddddd"}}
        })))
        .mount(&server)
        .await;

    let outcome = forge(&server).resolve("1.18.2").unwrap();
    let Outcome::Target(target) = outcome else {
        panic!("expected a download target");
    };
    assert_eq!(
        target.url,
        "https://maven.example/net/minecraftforge/forge/1.18.2-40.1.80/forge-1.18.2-40.1.80-installer.jar"
    );
    assert_eq!(
        target.checksum.as_deref(),
        Some("dddddddddddddddddddddddddddddddd")
    );
    assert_eq!(target.algorithm, ChecksumAlgorithm::Md5);
    assert_eq!(target.file_name, "forge-1.18.2-40.1.80-installer.jar");
}

#[tokio::test]
async fn test_forge_exact_promotion_beats_suffixed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/promotions_slim.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promos": {"1.2": "7.8.1.738", "1.2-latest": "9.9.9.999"}
        })))
        .mount(&server)
        .await;

    // Only the exact-match long version may be fetched.
    Mock::given(method("GET"))
        .and(path("/1.2-7.8.1.738/meta.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classifiers": {"installer": {"jar": "eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let Outcome::Target(target) = forge(&server).resolve("1.2").unwrap() else {
        panic!("expected a download target");
    };
    assert_eq!(target.file_name, "forge-1.2-7.8.1.738-installer.jar");
}

#[tokio::test]
async fn test_forge_passthrough_for_complete_long_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/promotions_slim.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promos": {"1.18.2-latest": "40.1.80"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.18.2-40.1.75/meta.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classifiers": {"installer": {"jar": "ffffffffffffffffffffffffffffffff"}}
        })))
        .mount(&server)
        .await;

    let Outcome::Target(target) = forge(&server).resolve("1.18.2-40.1.75").unwrap() else {
        panic!("expected a download target");
    };
    assert_eq!(target.file_name, "forge-1.18.2-40.1.75-installer.jar");
}

#[tokio::test]
async fn test_forge_missing_installer_checksum_is_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/promotions_slim.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"promos": {}})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.18.2-40.1.80/meta.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classifiers": {"sources": {"jar": "00000000000000000000000000000000"}}
        })))
        .mount(&server)
        .await;

    let Outcome::Target(target) = forge(&server).resolve("1.18.2-40.1.80").unwrap() else {
        panic!("expected a download target");
    };
    assert_eq!(target.checksum, None);
}

#[tokio::test]
async fn test_forge_list_flattens_index_then_promotion_keys() {
    let server = MockServer::start().await;

    // "1.9" sorts after "1.18.2" lexicographically; the listing must keep
    // the index's document order, not sorted key order.
    Mock::given(method("GET"))
        .and(path("/maven-metadata.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "1.9": ["1.9-12.16.0.1885"],
            "1.18.2": ["1.18.2-40.0.1", "1.18.2-40.1.80"]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/promotions_slim.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promos": {"1.18.2-latest": "40.1.80", "1.18.2-recommended": "40.1.60"}
        })))
        .mount(&server)
        .await;

    let Outcome::Listing(ids) = forge(&server).resolve("list").unwrap() else {
        panic!("expected a listing");
    };
    assert_eq!(
        ids,
        vec![
            "1.9-12.16.0.1885",
            "1.18.2-40.0.1",
            "1.18.2-40.1.80",
            "1.18.2-latest",
            "1.18.2-recommended"
        ]
    );
}

#[tokio::test]
async fn test_forge_bad_checksum_length_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/promotions_slim.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"promos": {}})))
        .mount(&server)
        .await;

    // 40 hex chars is a sha1 length, not md5.
    Mock::given(method("GET"))
        .and(path("/1.18.2-40.1.80/meta.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classifiers": {"installer": {"jar": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"}}
        })))
        .mount(&server)
        .await;

    let err = forge(&server).resolve("1.18.2-40.1.80").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}
