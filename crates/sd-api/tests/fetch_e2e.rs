//! End-to-end fetch tests against a loopback `tiny_http` backend.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use sd_api::{ApiError, LiveOptions, SpaceClient};
use sd_config::{ApiConfig, LiveFilter};
use sd_core::Session;
use sd_core::enums::LaunchTab;

struct MockBackend {
    origin: String,
    hits: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

/// Serve canned `(path_and_query, status, body)` routes; anything else is 404.
fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> MockBackend {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend");
    let port = server.server_addr().to_ip().expect("ip listener").port();
    let hits = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&hits);

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let url = request.url().to_string();
            let auth = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.to_string());
            recorded.lock().unwrap().push((url.clone(), auth));

            let (status, body) = routes
                .iter()
                .find(|(path, _, _)| *path == url)
                .map_or((404, "Not Found"), |(_, status, body)| (*status, *body));
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    MockBackend {
        origin: format!("http://127.0.0.1:{port}"),
        hits,
    }
}

fn client(backend: &MockBackend) -> SpaceClient {
    SpaceClient::new(&ApiConfig {
        base_url: backend.origin.clone(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn astronaut_list_resolves_images() {
    let backend = serve(vec![(
        "/api/space/astronauts?limit=20",
        200,
        r#"{"results": [{"id": 1, "name": "Jane Doe", "profile_image": null,
                          "thumbnail_url": "http://x/y.png"}]}"#,
    )]);

    let astronauts = client(&backend).list_astronauts(20).await.unwrap();
    assert_eq!(astronauts.len(), 1);
    assert_eq!(astronauts[0].id, "1");
    assert_eq!(astronauts[0].display_image.as_deref(), Some("http://x/y.png"));
}

#[tokio::test]
async fn empty_results_is_no_data() {
    let backend = serve(vec![("/api/space/agencies?limit=5", 200, r#"{"results": []}"#)]);
    let err = client(&backend).list_agencies(5).await.unwrap_err();
    assert!(err.is_no_data());
}

#[tokio::test]
async fn server_error_is_api_error_without_retry() {
    let backend = serve(vec![(
        "/api/space/programs?limit=20",
        500,
        "Failed to fetch programs data: boom",
    )]);

    let err = client(&backend).list_programs(20).await.unwrap_err();
    match err {
        ApiError::Api { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(backend.hits.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn detail_lookup_sends_bearer_token() {
    let backend = serve(vec![(
        "/api/space/agencies/44",
        200,
        r#"{"id": 44, "name": "NASA", "abbrev": "NASA"}"#,
    )]);

    let session = Session::new("tok-123", "jane@gmail.com");
    let agency = client(&backend)
        .with_session(Some(&session))
        .get_agency("44")
        .await
        .unwrap();
    assert_eq!(agency.abbrev.as_deref(), Some("NASA"));

    let hits = backend.hits.lock().unwrap();
    assert_eq!(hits[0].1.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn upcoming_tab_sends_type_param() {
    let backend = serve(vec![(
        "/api/space/launches?type=upcoming&limit=10",
        200,
        r#"{"results": [{"id": "a", "name": "Falcon 9 | X"}]}"#,
    )]);

    let launches = client(&backend)
        .list_launches(LaunchTab::Upcoming, 10, &LiveOptions::default())
        .await
        .unwrap();
    assert_eq!(launches.len(), 1);
}

#[tokio::test]
async fn live_tab_client_filter_uses_generic_collection() {
    let backend = serve(vec![(
        "/api/space/launches?limit=20",
        200,
        r#"{"results": [
            {"id": "a", "name": "A", "status": {"name": "In Flight", "abbrev": "In Flight"}},
            {"id": "b", "name": "B", "status": {"name": "Launch Successful", "abbrev": "Success"}},
            {"id": "c", "name": "C", "status": {"name": "Go for Launch", "abbrev": "Go"}}
        ]}"#,
    )]);

    let launches = client(&backend)
        .list_launches(LaunchTab::Live, 20, &LiveOptions::default())
        .await
        .unwrap();
    let ids: Vec<_> = launches.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[tokio::test]
async fn live_tab_server_filter_sends_type_live() {
    let backend = serve(vec![(
        "/api/space/launches?type=live&limit=20",
        200,
        r#"{"results": [{"id": "z", "name": "Z"}]}"#,
    )]);

    let live = LiveOptions {
        filter: LiveFilter::Server,
        statuses: Vec::new(),
    };
    let launches = client(&backend)
        .list_launches(LaunchTab::Live, 20, &live)
        .await
        .unwrap();
    assert_eq!(launches[0].id, "z");
}

#[tokio::test]
async fn live_tab_with_nothing_live_is_no_data() {
    let backend = serve(vec![(
        "/api/space/launches?limit=20",
        200,
        r#"{"results": [{"id": "b", "name": "B", "status": {"name": "Success"}}]}"#,
    )]);

    let err = client(&backend)
        .list_launches(LaunchTab::Live, 20, &LiveOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_no_data());
}

#[tokio::test]
async fn health_check_reports_up() {
    let backend = serve(vec![(
        "/api/health",
        200,
        r#"{"status": "UP", "service": "Space API", "timestamp": 1}"#,
    )]);
    assert!(client(&backend).health().await.unwrap().is_up());
}

#[tokio::test]
#[ignore] // requires a running backend at the configured base URL
async fn live_backend_lists_upcoming_launches() {
    let base_url = std::env::var("SPACEDASH_API__BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = SpaceClient::new(&ApiConfig {
        base_url,
        ..Default::default()
    })
    .unwrap();

    let launches = client
        .list_launches(LaunchTab::Upcoming, 5, &LiveOptions::default())
        .await
        .unwrap();
    assert!(launches.len() <= 5);
}
