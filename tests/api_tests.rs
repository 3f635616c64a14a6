//! HTTP API tests for `POST /api/upload-fasta` and `GET /api/references`.
//!
//! Requests are driven through the router in-process with `tower::ServiceExt`.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use pathoscan::web::server::{create_router, ServerConfig, MISSING_CONTENT_MESSAGE};
use pathoscan::{PathogenReference, ReferenceCatalog};
use serde_json::{json, Value};
use tower::ServiceExt;

fn embedded_router() -> Router {
    create_router(
        ReferenceCatalog::load_embedded().expect("embedded catalog"),
        &ServerConfig::default(),
    )
}

fn test_router() -> Router {
    let catalog = ReferenceCatalog::from_references(vec![
        PathogenReference::new("SARS-CoV-2", "ACGT"),
        PathogenReference::new("Influenza", "GGGGGG"),
    ])
    .expect("test catalog");
    create_router(catalog, &ServerConfig::default())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_upload(router: Router, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload-fasta")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

#[tokio::test]
async fn test_upload_reports_mutations() {
    let body = json!({
        "filename": "samples.fasta",
        "pathogen": "SARS-CoV-2",
        "content": ">same\nACGT\n>snp desc\nactt\n>ins\nACGTAA\n>del\nAC\n",
    });

    let (status, response) = post_upload(test_router(), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["filename"], "samples.fasta");
    assert_eq!(response["pathogen"], "SARS-CoV-2");
    assert_eq!(response["summary"], json!({"sequences": 4, "total_mutations": 3}));

    assert_eq!(
        response["sequences"],
        json!([
            {"id": "same", "length": 4},
            {"id": "snp", "length": 4},
            {"id": "ins", "length": 6},
            {"id": "del", "length": 2},
        ])
    );

    assert_eq!(response["mutations"][0], json!({"id": "same", "mutations": []}));
    assert_eq!(
        response["mutations"][1]["mutations"],
        json!([{"pos": 3, "ref": "G", "alt": "T", "type": "SNP"}])
    );
    assert_eq!(
        response["mutations"][2]["mutations"],
        json!([{"pos": 5, "ref": "-", "alt": "AA", "type": "INS"}])
    );
    assert_eq!(
        response["mutations"][3]["mutations"],
        json!([{"pos": 3, "ref": "GT", "alt": "-", "type": "DEL"}])
    );
}

#[tokio::test]
async fn test_missing_content_is_rejected() {
    let (status, response) = post_upload(test_router(), &json!({"filename": "x.fa"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], MISSING_CONTENT_MESSAGE);
}

#[tokio::test]
async fn test_non_string_content_is_rejected() {
    for content in [json!(42), json!(null), json!([">s1", "ACGT"]), json!({"a": 1})] {
        let (status, response) = post_upload(test_router(), &json!({"content": content})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "content: {content}");
        assert!(response["error"].is_string());
    }
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload-fasta")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, response) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], MISSING_CONTENT_MESSAGE);
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload-fasta")
        .body(Body::from(json!({"content": ">s\nACGT\n"}).to_string()))
        .unwrap();

    let (status, response) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].is_string());
}

#[tokio::test]
async fn test_unknown_pathogen_falls_back() {
    let body = json!({"pathogen": "Ebola", "content": ">s1\nACGT\n"});

    let (status, response) = post_upload(test_router(), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["pathogen"], "Ebola");
    assert_eq!(response["reference"], "SARS-CoV-2");
    assert_eq!(response["summary"]["total_mutations"], 0);
}

#[tokio::test]
async fn test_selects_requested_pathogen() {
    let body = json!({"pathogen": "Influenza", "content": ">s1\nGGGGGG\n"});

    let (status, response) = post_upload(test_router(), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["reference"], "Influenza");
    assert_eq!(response["summary"]["total_mutations"], 0);
}

#[tokio::test]
async fn test_defaults_without_filename_or_pathogen() {
    let body = json!({"content": ""});

    let (status, response) = post_upload(test_router(), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["filename"], Value::Null);
    assert_eq!(response["pathogen"], "SARS-CoV-2");
    assert_eq!(response["sequences"], json!([]));
    assert_eq!(response["mutations"], json!([]));
    assert_eq!(response["summary"], json!({"sequences": 0, "total_mutations": 0}));
}

#[tokio::test]
async fn test_null_optional_fields_use_defaults() {
    let body = json!({"filename": null, "pathogen": null, "content": ">s\nACGT\n"});

    let (status, response) = post_upload(test_router(), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["filename"], Value::Null);
    assert_eq!(response["pathogen"], "SARS-CoV-2");
}

#[tokio::test]
async fn test_non_fasta_content_yields_no_sequences() {
    let body = json!({"content": "this is not a fasta file"});

    let (status, response) = post_upload(test_router(), &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["summary"]["sequences"], 0);
}

#[tokio::test]
async fn test_upload_against_embedded_reference() {
    // First ten bases of the embedded SARS-CoV-2 fragment with the last one changed
    let body = json!({"pathogen": "SARS-CoV-2", "content": ">s1\nATTAAAGGTA\n"});

    let (status, response) = post_upload(embedded_router(), &body).await;

    assert_eq!(status, StatusCode::OK);
    let mutations = response["mutations"][0]["mutations"].as_array().unwrap();
    assert_eq!(mutations.len(), 2);
    assert_eq!(mutations[0], json!({"pos": 10, "ref": "T", "alt": "A", "type": "SNP"}));
    assert_eq!(mutations[1]["type"], "DEL");
    assert_eq!(mutations[1]["pos"], 11);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let catalog = ReferenceCatalog::load_embedded().unwrap();
    let config = ServerConfig {
        max_body_size: 64,
        ..ServerConfig::default()
    };
    let router = create_router(catalog, &config);

    let body = json!({"content": format!(">s1\n{}\n", "A".repeat(1024))});
    let (status, response) = post_upload(router, &body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response["error"].is_string());
}

#[tokio::test]
async fn test_security_headers_present() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/references")
        .body(Body::empty())
        .unwrap();

    let response = embedded_router().oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
}

#[tokio::test]
async fn test_list_references() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/references")
        .body(Body::empty())
        .unwrap();

    let (status, response) = send(embedded_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["default_pathogen"], "SARS-CoV-2");
    assert_eq!(response["count"], 3);

    let names: Vec<&str> = response["references"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["SARS-CoV-2", "Influenza", "MRSA"]);
    assert_eq!(response["references"][0]["md5"].as_str().unwrap().len(), 32);
}

#[tokio::test]
async fn test_concurrent_uploads_are_independent() {
    let router = test_router();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let router = router.clone();
            tokio::spawn(async move {
                let content = if i % 2 == 0 { ">s\nACGT\n" } else { ">s\nTTTT\n" };
                let (status, response) = post_upload(router, &json!({"content": content})).await;
                (i, status, response["summary"]["total_mutations"].as_u64())
            })
        })
        .collect();

    for handle in handles {
        let (i, status, total) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        let expected = if i % 2 == 0 { 0 } else { 3 };
        assert_eq!(total, Some(expected));
    }
}
