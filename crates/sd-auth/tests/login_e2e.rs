//! Login and signup against a loopback `tiny_http` token backend.

use std::io::Read;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use sd_auth::{AuthClient, AuthError, SessionContext, SessionSource, SessionStore, SignupAck};
use sd_config::ApiConfig;

struct MockAuth {
    origin: String,
    bodies: Arc<Mutex<Vec<(String, String)>>>,
}

/// Answer each `POST` path with a canned `(status, body)`; record request bodies.
fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> MockAuth {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock auth");
    let port = server.server_addr().to_ip().expect("ip listener").port();
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&bodies);

    std::thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let url = request.url().to_string();
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            recorded.lock().unwrap().push((url.clone(), body));

            let (status, reply) = routes
                .iter()
                .find(|(path, _, _)| *path == url)
                .map_or((404, ""), |(_, status, reply)| (*status, *reply));
            let _ = request.respond(tiny_http::Response::from_string(reply).with_status_code(status));
        }
    });

    MockAuth {
        origin: format!("http://127.0.0.1:{port}"),
        bodies,
    }
}

fn client(mock: &MockAuth) -> AuthClient {
    AuthClient::new(&ApiConfig {
        base_url: mock.origin.clone(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn login_returns_session_with_trimmed_email() {
    let mock = serve(vec![(
        "/api/login",
        200,
        r#"{"message": "Login successful", "token": "jwt-1"}"#,
    )]);

    let session = client(&mock)
        .login(" user@gmail.com ", "Abc12345!")
        .await
        .unwrap();
    assert_eq!(session.token, "jwt-1");
    assert_eq!(session.email, "user@gmail.com");

    let bodies = mock.bodies.lock().unwrap();
    let sent: serde_json::Value = serde_json::from_str(&bodies[0].1).unwrap();
    assert_eq!(sent["email"], "user@gmail.com");
    assert_eq!(sent["password"], "Abc12345!");
}

#[tokio::test]
async fn rejected_login_carries_server_message() {
    let mock = serve(vec![("/api/login", 401, r#"{"error": "Invalid credentials"}"#)]);

    let err = client(&mock)
        .login("user@gmail.com", "wrong")
        .await
        .unwrap_err();
    match err {
        AuthError::Rejected { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn login_without_token_is_malformed() {
    let mock = serve(vec![("/api/login", 200, r#"{"message": "ok"}"#)]);
    let err = client(&mock)
        .login("user@gmail.com", "Abc12345!")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::MalformedResponse(_)));
}

#[tokio::test]
async fn signup_acknowledges() {
    let mock = serve(vec![(
        "/api/signup",
        200,
        r#"{"message": "User registered successfully"}"#,
    )]);

    let ack = client(&mock)
        .signup("user@gmail.com", "Abc12345!", "Abc12345!")
        .await
        .unwrap();
    assert_eq!(
        ack,
        SignupAck {
            message: Some("User registered successfully".into())
        }
    );
}

#[tokio::test]
async fn signup_mismatch_never_reaches_backend() {
    let mock = serve(vec![("/api/signup", 200, "{}")]);
    let err = client(&mock)
        .signup("user@gmail.com", "Abc12345!", "Abc12345?")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
    assert!(mock.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn context_login_persists_and_logout_clears() {
    let mock = serve(vec![("/api/login", 200, r#"{"token": "jwt-2"}"#)]);
    let tmp = tempfile::TempDir::new().unwrap();
    let store = SessionStore::at(tmp.path());

    let mut ctx = SessionContext::with_session(store.clone(), None);
    let session = ctx
        .login(&client(&mock), "user@gmail.com", "Abc12345!")
        .await
        .unwrap()
        .clone();
    assert_eq!(session.token, "jwt-2");
    assert_eq!(ctx.source(), Some(SessionSource::File));
    assert!(store.path().exists());

    ctx.logout().unwrap();
    assert!(!ctx.is_authenticated());
    assert!(!store.path().exists());
}
