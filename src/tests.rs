//! Integration tests: the backend served on a random port, driven by plain
//! reqwest calls and by the sync gateway and content store.

use std::sync::Arc;

use axum::{response::Redirect, routing::post, Router};
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::{Config, GatewayConfig, WritePolicy};
use crate::content::{default_document, ContentStore, LoadOutcome, Mutation};
use crate::db::{init_database, Repository};
use crate::errors::SyncError;
use crate::models::{AspirationSubmission, HeroBackground, NewsCategory, NewsDraft, WriteAction};
use crate::sync::{Gateway, HttpGateway, WRITE_CONTENT_TYPE};
use crate::{create_router, AppState};

const PSK: &str = "test-api-key";

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_psk(Some(PSK.to_string())).await
    }

    async fn with_psk(psk: Option<String>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        let config = Config {
            api_psk: psk,
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            max_body_bytes: 16 * 1024 * 1024,
        };

        let app = create_router(AppState {
            repo,
            config: Arc::new(config),
        });

        let base_url = serve(app).await;

        TestFixture {
            client: Client::new(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn gateway(&self, api_key: Option<&str>, policy: WritePolicy) -> HttpGateway {
        let mut config = GatewayConfig::new(self.url("/api/content"));
        config.api_key = api_key.map(str::to_string);
        config.aspiration_endpoint = Some(self.url("/api/aspirations"));
        config.write_policy = policy;
        HttpGateway::new(config).unwrap()
    }

    fn admin_gateway(&self) -> HttpGateway {
        self.gateway(Some(PSK), WritePolicy::Strict)
    }
}

/// Bind to a random port, spawn the server, return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_content_is_public_and_seeded() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/content"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body.get("success").is_none());
    assert_eq!(body, serde_json::to_value(default_document()).unwrap());
}

#[tokio::test]
async fn test_revision_endpoint() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/content/revision"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["revisionId"], 0);
    assert!(body["data"]["generatedAt"].is_string());
}

#[tokio::test]
async fn test_write_requires_psk() {
    let fixture = TestFixture::new().await;
    let action = json!({
        "action": "UPDATE_HERO_BACKGROUND",
        "payload": { "backgroundImage": "intruder.jpg" }
    });

    let resp = fixture
        .client
        .post(fixture.url("/api/content"))
        .header("content-type", WRITE_CONTENT_TYPE)
        .body(action.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("UNAUTHORIZED"));

    let resp = fixture
        .client
        .post(fixture.url("/api/content"))
        .header("x-api-key", "wrong-key")
        .body(action.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let doc = fixture.admin_gateway().fetch_document().await.unwrap();
    assert_eq!(doc, default_document());
}

#[tokio::test]
async fn test_plain_text_write_with_bearer_key() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/content"))
        .header("content-type", WRITE_CONTENT_TYPE)
        .header("authorization", format!("Bearer {}", PSK))
        .body(
            json!({
                "action": "UPDATE_VISI_MISI",
                "payload": { "visi": "Visi baru", "misi": ["Satu", "Dua"] }
            })
            .to_string(),
        )
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["revisionId"], 1);

    let doc = fixture.admin_gateway().fetch_document().await.unwrap();
    assert_eq!(doc.vision_mission.vision, "Visi baru");
    assert_eq!(doc.vision_mission.mission, vec!["Satu", "Dua"]);
}

#[tokio::test]
async fn test_unknown_action_rejected() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/content"))
        .header("x-api-key", PSK)
        .body(r#"{"action":"DROP_EVERYTHING","payload":{}}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("BAD_REQUEST"));
}

#[tokio::test]
async fn test_open_writes_without_psk() {
    let fixture = TestFixture::with_psk(None).await;
    let gateway = fixture.gateway(None, WritePolicy::Strict);

    gateway
        .push(WriteAction::UpdateHeroBackground(HeroBackground {
            background_image: "dev.jpg".to_string(),
        }))
        .await
        .unwrap();

    let doc = gateway.fetch_document().await.unwrap();
    assert_eq!(doc.hero.background_image, "dev.jpg");
}

#[tokio::test]
async fn test_store_commit_then_load_round_trips() {
    let fixture = TestFixture::new().await;
    let editor = ContentStore::new(fixture.admin_gateway());
    assert_eq!(editor.load().await, LoadOutcome::Loaded);

    editor
        .mutate(Mutation::AddNews(NewsDraft {
            title: "Musyawarah Besar".to_string(),
            body: "Dilaksanakan di aula kampus.".to_string(),
            category: NewsCategory::Agenda,
        }))
        .await;
    editor
        .mutate(Mutation::AddGalleryItem {
            image_ref: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            caption: "Test".to_string(),
        })
        .await;
    let mut leader = editor.working().await.leadership.top[0].clone();
    leader.name = "Ketua Baru".to_string();
    editor.mutate(Mutation::UpdateLeader(leader)).await;
    let committed = editor.working().await;

    editor.commit().await.unwrap();
    assert_eq!(editor.canonical().await, committed);

    editor.load().await;
    assert_eq!(editor.canonical().await, committed);

    // A visitor's store sees the same document.
    let visitor = ContentStore::new(fixture.gateway(None, WritePolicy::Strict));
    visitor.load().await;
    assert_eq!(visitor.canonical().await, committed);
}

#[tokio::test]
async fn test_store_commit_section() {
    let fixture = TestFixture::new().await;
    let store = ContentStore::new(fixture.admin_gateway());
    store.load().await;

    store.mutate(Mutation::RemoveGalleryItem(1)).await;
    store
        .mutate(Mutation::SetHeroImage("not-saved.jpg".to_string()))
        .await;
    store
        .commit_section(crate::models::Section::Gallery)
        .await
        .unwrap();

    let remote = fixture.admin_gateway().fetch_document().await.unwrap();
    assert!(remote.gallery.iter().all(|g| g.id != 1));
    assert_eq!(remote.hero, default_document().hero);
}

#[tokio::test]
async fn test_strict_commit_surfaces_server_error() {
    let fixture = TestFixture::new().await;
    let store = ContentStore::new(fixture.gateway(Some("wrong-key"), WritePolicy::Strict));
    store.load().await;
    store
        .mutate(Mutation::SetHeroImage("edit.jpg".to_string()))
        .await;

    let err = store.commit().await.unwrap_err();
    match &err {
        SyncError::Server { status, message } => {
            assert_eq!(*status, Some(401));
            assert!(message.contains("Invalid API key"));
        }
        other => panic!("expected server error, got {:?}", other),
    }

    assert_eq!(store.canonical().await, default_document());
    assert_eq!(
        store.working().await.hero.background_image,
        "edit.jpg".to_string()
    );
    assert!(store.status().await.error.is_some());
}

#[tokio::test]
async fn test_best_effort_cannot_see_rejection() {
    let fixture = TestFixture::new().await;
    let gateway = fixture.gateway(Some("wrong-key"), WritePolicy::BestEffort);

    gateway
        .push(WriteAction::UpdateHeroBackground(HeroBackground {
            background_image: "lost.jpg".to_string(),
        }))
        .await
        .unwrap();

    let doc = fixture.admin_gateway().fetch_document().await.unwrap();
    assert_eq!(doc.hero, default_document().hero);
}

#[tokio::test]
async fn test_cross_origin_redirect_on_write() {
    let fixture = TestFixture::new().await;
    // Same server, addressed by another host name: a different origin.
    let target = fixture.url("/api/content").replace("127.0.0.1", "localhost");
    let redirector = Router::new().route(
        "/exec",
        post(move || {
            let target = target.clone();
            async move { Redirect::to(&target) }
        }),
    );
    let redirect_url = format!("{}/exec", serve(redirector).await);

    let mut config = GatewayConfig::new(redirect_url.clone());
    config.write_policy = WritePolicy::BestEffort;
    let best_effort = HttpGateway::new(config).unwrap();
    best_effort
        .push_document(default_document())
        .await
        .unwrap();

    // Strict follows the redirect and finds no success flag in the reply.
    let strict = HttpGateway::new(GatewayConfig::new(redirect_url)).unwrap();
    let err = strict.push_document(default_document()).await.unwrap_err();
    assert!(matches!(err, SyncError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let fixture = TestFixture::new().await;
    let mut config = GatewayConfig::new(fixture.url("/api/missing"));
    config.api_key = Some(PSK.to_string());
    let gateway = HttpGateway::new(config).unwrap();

    let err = gateway.fetch_document().await.unwrap_err();
    assert!(matches!(err, SyncError::Server { status: Some(404), .. }));
}

#[tokio::test]
async fn test_aspiration_flow() {
    let fixture = TestFixture::new().await;
    let visitor = fixture.gateway(None, WritePolicy::Strict);

    visitor
        .submit_aspiration(&AspirationSubmission {
            name: "Rina".to_string(),
            student_id: "P07120".to_string(),
            department: "Kebidanan".to_string(),
            message: "Mohon perpanjang jam perpustakaan".to_string(),
            contact: Some("rina@example.com".to_string()),
            attachment_name: None,
        })
        .await
        .unwrap();

    // Listing needs the key.
    let resp = fixture
        .client
        .get(fixture.url("/api/aspirations"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = fixture
        .client
        .get(fixture.url("/api/aspirations"))
        .header("x-api-key", PSK)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["studentId"], "P07120");
    assert_eq!(items[0]["contact"], "rina@example.com");
}

#[tokio::test]
async fn test_aspiration_validation() {
    let fixture = TestFixture::new().await;
    let visitor = fixture.gateway(None, WritePolicy::Strict);

    let err = visitor
        .submit_aspiration(&AspirationSubmission {
            name: "Rina".to_string(),
            student_id: " ".to_string(),
            department: "Kebidanan".to_string(),
            message: String::new(),
            contact: None,
            attachment_name: None,
        })
        .await
        .unwrap_err();

    match err {
        SyncError::Server { status, message } => {
            assert_eq!(status, Some(400));
            assert!(message.contains("studentId"));
            assert!(message.contains("message"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_aspiration_gets_error_envelope() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/aspirations"))
        .header("content-type", "application/json")
        .body("{\"name\": \"Rina\",")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("JSON error"));
}
