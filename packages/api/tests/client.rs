//! End-to-end tests of the data layer against a mock backend: session
//! persistence, 401 teardown, error normalization, and the exact shape of
//! partial-update request bodies.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::{Api, ApiConfig, ApiError, Credentials, SessionEvent, UpdateOwner, User};
use store::{MemoryBackend, StorageBackend};

fn api_for(server: &MockServer, backend: MemoryBackend) -> Api {
    Api::new(ApiConfig::new(&server.uri()), Arc::new(backend))
}

fn seed_session(backend: &MemoryBackend, token: &str) {
    backend.set("vetdesk_token", token);
    backend.set(
        "vetdesk_user",
        r#"{"id":"u1","name":"Ana","email":"a@b.com"}"#,
    );
}

#[tokio::test]
async fn login_persists_token_and_user_without_sending_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "email": "a@b.com",
            "password": "validpass1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "T1",
            "user": { "id": "u1", "name": "Ana", "email": "a@b.com" }
        })))
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    let api = api_for(&server, backend.clone());

    let response = api
        .auth
        .login(&Credentials {
            email: "a@b.com".to_string(),
            password: "validpass1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "T1");
    assert_eq!(backend.get("vetdesk_token").as_deref(), Some("T1"));
    let stored: User =
        serde_json::from_str(&backend.get("vetdesk_user").unwrap()).unwrap();
    assert_eq!(stored.id, "u1");
    assert!(api.auth.is_authenticated());

    // Login must not present credentials it does not have yet.
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn register_creates_user_but_no_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "u2", "name": "Bia", "email": "b@c.com"
        })))
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    let api = api_for(&server, backend.clone());

    let user = api
        .auth
        .register(&api::NewUser {
            name: "Bia".to_string(),
            email: "b@c.com".to_string(),
            password: "validpass1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, "u2");
    assert!(backend.get("vetdesk_token").is_none());
    assert!(!api.auth.is_authenticated());
}

#[tokio::test]
async fn unauthorized_clears_session_and_notifies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/owners"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    seed_session(&backend, "stale");
    let api = api_for(&server, backend.clone());
    let mut events = api.session.subscribe();

    let err = api.owners.list().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);

    // Both keys are gone and the expiry event reached the subscriber.
    assert!(backend.get("vetdesk_token").is_none());
    assert!(backend.get("vetdesk_user").is_none());
    assert_eq!(events.try_next().unwrap(), Some(SessionEvent::Expired));
}

#[tokio::test]
async fn unauthenticated_login_failure_does_not_touch_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "bad credentials" })),
        )
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    let api = api_for(&server, backend.clone());
    let mut events = api.session.subscribe();

    let err = api
        .auth
        .login(&Credentials {
            email: "a@b.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    // 401 without auth attached is an ordinary request error, not expiry.
    assert_eq!(
        err,
        ApiError::Request {
            message: "bad credentials".to_string(),
            status: 401
        }
    );
    assert!(events.try_next().is_err());
}

#[tokio::test]
async fn bearer_token_is_attached_to_authorized_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/animals"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    seed_session(&backend, "T1");
    let api = api_for(&server, backend);

    let animals = api.animals.list().await.unwrap();
    assert!(animals.is_empty());
}

#[tokio::test]
async fn error_body_message_is_preferred_over_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/owners/o1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database down" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/owners/o2"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "error": "phone is invalid" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/owners/o3"))
        .respond_with(ResponseTemplate::new(400).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    seed_session(&backend, "T1");
    let api = api_for(&server, backend);

    assert_eq!(
        api.owners.get("o1").await.unwrap_err(),
        ApiError::Request {
            message: "database down".to_string(),
            status: 500
        }
    );
    assert_eq!(
        api.owners.get("o2").await.unwrap_err(),
        ApiError::Request {
            message: "phone is invalid".to_string(),
            status: 422
        }
    );
    assert_eq!(
        api.owners.get("o3").await.unwrap_err(),
        ApiError::Request {
            message: "400: Bad Request".to_string(),
            status: 400
        }
    );
}

#[tokio::test]
async fn delete_resolves_on_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/records/r1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    seed_session(&backend, "T1");
    let api = api_for(&server, backend);

    api.records.delete("r1").await.unwrap();
}

#[tokio::test]
async fn partial_update_sends_exactly_the_supplied_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/owners/o1"))
        .and(body_json(json!({ "city": "SP" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "o1",
            "name": "Carlos",
            "phone": "11999990000",
            "city": "SP",
            "userId": "u1",
            "createdAt": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    seed_session(&backend, "T1");
    let api = api_for(&server, backend);

    let owner = api
        .owners
        .update(
            "o1",
            &UpdateOwner {
                city: Some("SP".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(owner.city.as_deref(), Some("SP"));

    // The body must be exactly {"city":"SP"}, with no synthesized fields.
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn records_by_animal_come_back_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "r-old", "weight": "4kg", "medications": "none", "dosage": "-",
                "notes": "routine", "attendedAt": "2024-06-01T10:00:00Z",
                "animalId": "a1", "createdAt": "2024-06-01T10:00:00Z"
            },
            {
                "id": "r-other", "weight": "9kg", "medications": "none", "dosage": "-",
                "notes": "routine", "attendedAt": "2024-06-20T10:00:00Z",
                "animalId": "a2", "createdAt": "2024-06-20T10:00:00Z"
            },
            {
                "id": "r-new", "weight": "4kg", "medications": "none", "dosage": "-",
                "notes": "routine", "attendedAt": "2024-06-15T10:00:00Z",
                "animalId": "a1", "createdAt": "2024-06-15T10:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let backend = MemoryBackend::new();
    seed_session(&backend, "T1");
    let api = api_for(&server, backend);

    let records = api.records.list_by_animal("a1").await.unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r-new", "r-old"]);
}

#[tokio::test]
async fn transport_failure_normalizes_to_connectivity() {
    // Nothing listens here; the connection is refused.
    let api = Api::new(
        ApiConfig::new("http://127.0.0.1:9"),
        Arc::new(MemoryBackend::new()),
    );

    let err = api.owners.list().await.unwrap_err();
    assert_eq!(err, ApiError::Connectivity);
}
