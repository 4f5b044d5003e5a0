//! Integration tests against a local tiny_http fixture server.
//!
//! Each test spins up a real HTTP server on 127.0.0.1:0 so the full request
//! path is exercised: URL composition, bearer attachment, multipart encoding,
//! status mapping, and typed decoding.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use cram_api::{ApiClient, ApiError};
use cram_auth::{Session, TokenStore};
use cram_core::enums::{Difficulty, QuestionKind};

struct Route {
    path: &'static str,
    status: u16,
    body: &'static str,
}

struct Received {
    method: String,
    url: String,
    authorization: Option<String>,
    content_type: Option<String>,
    body: String,
}

struct Fixture {
    base_url: String,
    requests: mpsc::Receiver<Received>,
}

impl Fixture {
    fn next_request(&self) -> Received {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("fixture server should have received a request")
    }
}

/// Start a fixture server answering the given routes. Unknown paths get 404.
fn spawn_server(routes: Vec<Route>) -> Fixture {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fixture server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("fixture server should listen on an IP address");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);

            let header = |name: &'static str| {
                request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv(name))
                    .map(|h| h.value.as_str().to_string())
            };
            let received = Received {
                method: request.method().to_string(),
                url: request.url().to_string(),
                authorization: header("Authorization"),
                content_type: header("Content-Type"),
                body,
            };

            let route = routes.iter().find(|r| r.path == received.url);
            let response = match route {
                Some(r) => tiny_http::Response::from_string(r.body).with_status_code(r.status),
                None => tiny_http::Response::from_string("not found").with_status_code(404),
            };

            let _ = tx.send(received);
            let _ = request.respond(response);
        }
    });

    Fixture {
        base_url: format!("http://127.0.0.1:{port}"),
        requests: rx,
    }
}

fn file_session(tmp: &tempfile::TempDir) -> Session {
    Session::anonymous(TokenStore::at_file(tmp.path().join("credentials")))
}

fn token_session(tmp: &tempfile::TempDir, token: &str) -> Session {
    Session::with_token(TokenStore::at_file(tmp.path().join("credentials")), token)
}

// ---------------------------------------------------------------------------
// Authorization header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bearer_token_attached_when_session_has_one() {
    let fixture = spawn_server(vec![Route {
        path: "/notes",
        status: 200,
        body: r#"{"notes": []}"#,
    }]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let client = ApiClient::new(&fixture.base_url, 5, token_session(&tmp, "tok_abc"));

    let notes = client.notes().await.expect("list notes");
    assert!(notes.is_empty());

    let received = fixture.next_request();
    assert_eq!(received.method, "GET");
    assert_eq!(received.authorization.as_deref(), Some("Bearer tok_abc"));
}

#[tokio::test]
async fn anonymous_request_carries_no_authorization_header() {
    let fixture = spawn_server(vec![Route {
        path: "/notes",
        status: 200,
        body: r#"{"notes": []}"#,
    }]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let client = ApiClient::new(&fixture.base_url, 5, file_session(&tmp));

    client.notes().await.expect("list notes");

    let received = fixture.next_request();
    assert_eq!(received.authorization, None);
}

#[tokio::test]
async fn logout_strips_authorization_from_subsequent_requests() {
    let fixture = spawn_server(vec![Route {
        path: "/notes",
        status: 200,
        body: r#"{"notes": []}"#,
    }]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut client = ApiClient::new(&fixture.base_url, 5, token_session(&tmp, "tok_live"));

    client.notes().await.expect("authenticated list");
    assert_eq!(
        fixture.next_request().authorization.as_deref(),
        Some("Bearer tok_live")
    );

    client.logout().expect("logout");
    assert!(!client.session().is_authenticated());

    client.notes().await.expect("anonymous list");
    assert_eq!(fixture.next_request().authorization, None);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_adopts_and_persists_token() {
    let fixture = spawn_server(vec![Route {
        path: "/auth/login",
        status: 200,
        body: r#"{"token": "tok_fresh", "user": {"id": "u_1", "email": "ada@example.com", "name": "Ada"}}"#,
    }]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut client = ApiClient::new(&fixture.base_url, 5, file_session(&tmp));

    let user = client
        .login("ada@example.com", "hunter2")
        .await
        .expect("login");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(client.session().token(), Some("tok_fresh"));

    let received = fixture.next_request();
    assert_eq!(received.method, "POST");
    assert_eq!(received.url, "/auth/login");
    let body: serde_json::Value = serde_json::from_str(&received.body).expect("json body");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["password"], "hunter2");

    // Token reached the store, not just the in-memory session.
    let reloaded = Session::load(TokenStore::at_file(tmp.path().join("credentials")));
    assert_eq!(reloaded.token(), Some("tok_fresh"));
}

#[tokio::test]
async fn rejected_login_leaves_session_anonymous() {
    let fixture = spawn_server(vec![Route {
        path: "/auth/login",
        status: 401,
        body: "invalid credentials",
    }]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut client = ApiClient::new(&fixture.base_url, 5, file_session(&tmp));

    let err = client
        .login("ada@example.com", "wrong")
        .await
        .expect_err("login should fail");
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid credentials");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(!client.session().is_authenticated());
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let fixture = spawn_server(vec![Route {
        path: "/notes",
        status: 500,
        body: "internal error",
    }]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let client = ApiClient::new(&fixture.base_url, 5, file_session(&tmp));

    let err = client.notes().await.expect_err("listing should fail");
    assert!(matches!(err, ApiError::Api { status: 500, .. }));
}

#[tokio::test]
async fn malformed_success_body_maps_to_decode_error() {
    let fixture = spawn_server(vec![Route {
        path: "/notes",
        status: 200,
        body: "<html>definitely not json</html>",
    }]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let client = ApiClient::new(&fixture.base_url, 5, file_session(&tmp));

    let err = client.notes().await.expect_err("decoding should fail");
    match err {
        ApiError::Decode { endpoint, .. } => assert_eq!(endpoint, "/notes"),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_sends_single_multipart_file_part() {
    let fixture = spawn_server(vec![Route {
        path: "/notes/upload",
        status: 200,
        body: r#"{"id": "n_9", "note_name": "physics.pdf", "uploadedAt": "2025-11-04T08:00:00Z"}"#,
    }]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let client = ApiClient::new(&fixture.base_url, 5, token_session(&tmp, "tok_up"));

    let note = client
        .upload_note("physics.pdf", "application/pdf", b"%PDF-1.4 demo".to_vec())
        .await
        .expect("upload");
    assert_eq!(note.id, "n_9");
    assert_eq!(note.note_name, "physics.pdf");

    let received = fixture.next_request();
    assert_eq!(received.method, "POST");
    let content_type = received.content_type.expect("multipart content type");
    assert!(
        content_type.starts_with("multipart/form-data"),
        "got: {content_type}"
    );
    assert!(received.body.contains("name=\"file\""));
    assert!(received.body.contains("filename=\"physics.pdf\""));
    assert!(received.body.contains("application/pdf"));
    assert!(received.body.contains("%PDF-1.4 demo"));
}

// ---------------------------------------------------------------------------
// Quiz round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_and_submit_round_trip() {
    let fixture = spawn_server(vec![
        Route {
            path: "/notes/n_1/questions",
            status: 200,
            body: r#"{"questions": [
                {"id": "q_a", "noteId": "n_1", "question": "First?", "type": "short_answer",
                 "difficulty": "medium", "createdAt": "2025-11-04T09:00:00Z"},
                {"id": "q_b", "noteId": "n_1", "question": "Second?", "type": "short_answer",
                 "difficulty": "medium", "createdAt": "2025-11-04T09:00:01Z"}
            ]}"#,
        },
        Route {
            path: "/notes/n_1/questions/submit",
            status: 200,
            body: r#"{"score": 50.0, "gradedAnswers": [
                {"questionId": "q_b", "isCorrect": false, "userAnswer": "two"},
                {"questionId": "q_a", "isCorrect": true, "userAnswer": "one"}
            ]}"#,
        },
    ]);
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let client = ApiClient::new(&fixture.base_url, 5, token_session(&tmp, "tok_q"));

    let questions = client
        .generate_questions("n_1", QuestionKind::ShortAnswer, Difficulty::Medium, 2)
        .await
        .expect("generate");
    assert_eq!(questions.len(), 2);

    let generate_req = fixture.next_request();
    let generate_body: serde_json::Value =
        serde_json::from_str(&generate_req.body).expect("json body");
    assert_eq!(generate_body["type"], "short_answer");
    assert_eq!(generate_body["difficulty"], "medium");
    assert_eq!(generate_body["count"], 2);

    let answers: Vec<_> = questions
        .iter()
        .zip(["one", "two"])
        .map(|(q, a)| cram_core::entities::Answer {
            question_id: q.id.clone(),
            question: q.question.clone(),
            answer: a.to_string(),
        })
        .collect();
    let report = client
        .submit_answers("n_1", &answers)
        .await
        .expect("submit");

    let submit_req = fixture.next_request();
    let submit_body: serde_json::Value = serde_json::from_str(&submit_req.body).expect("json body");
    let sent = submit_body["answers"].as_array().expect("answers array");
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0]["questionId"], "q_a");
    assert_eq!(sent[1]["questionId"], "q_b");

    // Grading correlates by id even though the server returned them reversed.
    assert!((report.score - 50.0).abs() < f64::EPSILON);
    assert!(report.graded_for("q_a").expect("graded q_a").is_correct);
    assert!(!report.graded_for("q_b").expect("graded q_b").is_correct);
}

// ---------------------------------------------------------------------------
// Live smoke test
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore] // requires network + CRAM_TEST_EMAIL / CRAM_TEST_PASSWORD
async fn live_login_and_list_notes() {
    let (Ok(email), Ok(password)) = (
        std::env::var("CRAM_TEST_EMAIL"),
        std::env::var("CRAM_TEST_PASSWORD"),
    ) else {
        eprintln!("SKIP: CRAM_TEST_EMAIL / CRAM_TEST_PASSWORD not set");
        return;
    };

    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut client = ApiClient::new(cram_config::DEFAULT_BASE_URL, 30, file_session(&tmp));
    let user = client.login(&email, &password).await.expect("live login");
    eprintln!("OK: logged in as {}", user.email);

    let notes = client.notes().await.expect("live notes");
    eprintln!("OK: {} notes", notes.len());
}
