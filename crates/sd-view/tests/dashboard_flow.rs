//! Route → fetch → state → cards, against a loopback backend.

use pretty_assertions::assert_eq;
use sd_api::SpaceClient;
use sd_config::ApiConfig;
use sd_core::Session;
use sd_core::enums::ResourceKind;
use sd_view::screen::{self, LoadOptions};
use sd_view::{NavOutcome, Navigator, PLACEHOLDER_IMAGE, Route, Screen, ViewMode, ViewPhase, Views};

const ASTRONAUTS: &str = r#"{"results": [
    {"id": 1, "name": "Jane Doe", "profile_image": null, "thumbnail_url": "http://x/y.png",
     "status": {"name": "Active"}},
    {"id": 2, "name": "John Roe"}
]}"#;
const ASTRONAUT_1: &str = r#"{"id": 1, "name": "Jane Doe", "profile_image": null,
    "thumbnail_url": "http://x/y.png", "bio": "Flew twice."}"#;

/// Canned `(path_and_query, status, body)` routes; anything else is 404.
fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend");
    let port = server.server_addr().to_ip().expect("ip listener").port();
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let url = request.url().to_string();
            let (status, body) = routes
                .iter()
                .find(|(path, _, _)| *path == url)
                .map_or((404, "Not Found"), |(_, status, body)| (*status, *body));
            let _ = request.respond(tiny_http::Response::from_string(body).with_status_code(status));
        }
    });
    format!("http://127.0.0.1:{port}")
}

fn client(origin: String, session: &Session) -> SpaceClient {
    SpaceClient::new(&ApiConfig {
        base_url: origin,
        ..Default::default()
    })
    .unwrap()
    .with_session(Some(session))
}

#[tokio::test]
async fn astronaut_list_then_detail_card() {
    let origin = serve(vec![
        ("/api/space/astronauts?limit=20", 200, ASTRONAUTS),
        ("/api/space/astronauts/1", 200, ASTRONAUT_1),
    ]);
    let session = Session::new("tok", "user@gmail.com");
    let client = client(origin, &session);
    let options = LoadOptions::default();
    let mut nav = Navigator::new();

    let outcome = nav.navigate(Route::Astronauts, Some(&session));
    let list = screen::load(&client, outcome.route(), Some(&session), &options).await;
    assert_eq!(list.phase(), Some(ViewPhase::Ready));
    let cards = list.cards();
    assert_eq!(cards.len(), 2, "one card per result");
    assert_eq!(cards[0].image_or_placeholder(), "http://x/y.png");
    assert_eq!(cards[1].image_or_placeholder(), PLACEHOLDER_IMAGE);

    let outcome = nav.select(cards[0].kind, cards[0].id.clone(), Some(&session));
    assert_eq!(outcome.route(), &Route::Astronaut("1".into()));
    let detail = screen::load(&client, outcome.route(), Some(&session), &options).await;
    let card = &detail.cards()[0];
    assert_eq!(card.image_or_placeholder(), "http://x/y.png");
    assert_eq!(card.description.as_deref(), Some("Flew twice."));

    assert_eq!(nav.back(), Some(&Route::Astronauts));
}

#[tokio::test]
async fn reloads_reuse_one_cycle_per_view() {
    let origin = serve(vec![
        ("/api/space/astronauts?limit=20", 200, ASTRONAUTS),
        ("/api/space/astronauts/1", 200, ASTRONAUT_1),
    ]);
    let session = Session::new("tok", "user@gmail.com");
    let client = client(origin, &session);
    let options = LoadOptions::default();
    let mut views = Views::default();

    assert_eq!(views.generation(ResourceKind::Astronaut, ViewMode::List), 0);
    for _ in 0..2 {
        let list = views.load(&client, &Route::Astronauts, Some(&session), &options).await;
        assert_eq!(list.cards().len(), 2);
    }
    let detail = views
        .load(&client, &Route::Astronaut("1".into()), Some(&session), &options)
        .await;
    assert_eq!(detail.phase(), Some(ViewPhase::Ready));

    assert_eq!(views.generation(ResourceKind::Astronaut, ViewMode::List), 2);
    assert_eq!(views.generation(ResourceKind::Astronaut, ViewMode::Detail), 1);
    assert_eq!(views.generation(ResourceKind::Agency, ViewMode::List), 0);
}

#[tokio::test]
async fn empty_and_failing_lists() {
    let origin = serve(vec![
        ("/api/space/programs?limit=20", 200, r#"{"results": []}"#),
        ("/api/space/agencies?limit=20", 500, "Failed to fetch agencies data"),
    ]);
    let session = Session::new("tok", "user@gmail.com");
    let client = client(origin, &session);
    let options = LoadOptions::default();

    let programs = screen::load(&client, &Route::Programs, Some(&session), &options).await;
    assert_eq!(programs.phase(), Some(ViewPhase::Empty));
    assert_eq!(programs.message().as_deref(), Some("No programs found"));

    let agencies = screen::load(&client, &Route::Agencies, Some(&session), &options).await;
    assert_eq!(agencies.phase(), Some(ViewPhase::Error));
    assert!(agencies.cards().is_empty());
    assert_eq!(
        agencies.message().as_deref(),
        Some("Failed to fetch agencies. Please try again later.")
    );
}

#[tokio::test]
async fn missing_detail_is_not_found() {
    let origin = serve(vec![]);
    let session = Session::new("tok", "user@gmail.com");
    let client = client(origin, &session);

    let screen = screen::load(
        &client,
        &Route::detail(ResourceKind::Launch, "nope-1"),
        Some(&session),
        &LoadOptions::default(),
    )
    .await;
    assert_eq!(screen.message().as_deref(), Some("Launch not found"));
}

#[test]
fn guard_then_login_resumes() {
    let mut nav = Navigator::new();
    let outcome = nav.navigate(Route::parse("/program/5").unwrap(), None);
    assert!(matches!(outcome, NavOutcome::Redirected { .. }));
    assert_eq!(nav.current(), &Route::SignIn);

    let session = Session::new("tok", "user@gmail.com");
    let resumed = nav.resume_after_login(&session);
    assert_eq!(resumed, NavOutcome::Arrived(Route::Program("5".into())));
}

#[tokio::test]
async fn profile_shows_session_email() {
    let session = Session::new("tok", "user@gmail.com");
    let client = client("http://127.0.0.1:1".into(), &session);
    let screen = screen::load(&client, &Route::Profile, Some(&session), &LoadOptions::default()).await;
    assert_eq!(
        screen,
        Screen::Profile {
            email: "user@gmail.com".into()
        }
    );
}
