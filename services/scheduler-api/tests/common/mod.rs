use autosched_scheduler_api::config::{Config, WeeklyMeetingConfig, ZoomConfig};
use autosched_scheduler_api::{create_app, AppState};
use autosched_zoom_connector::AccountCredentials;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::post,
    Router,
};
use serde_json::{json, Value as JsonValue};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const CRON_SECRET: &str = "test-cron-secret";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: JsonValue,
}

#[derive(Clone)]
struct MockState {
    meeting_requests: Arc<Mutex<Vec<RecordedRequest>>>,
    token_requests: Arc<Mutex<Vec<RecordedRequest>>>,
    meeting_response: Arc<Mutex<(StatusCode, JsonValue)>>,
    token_response: Arc<Mutex<(StatusCode, JsonValue)>>,
}

/// In-process stand-in for Zoom's REST and OAuth endpoints.
pub struct MockZoom {
    pub api_base: String,
    pub token_url: String,
    state: MockState,
    _server_handle: tokio::task::JoinHandle<()>,
}

impl MockZoom {
    pub async fn start() -> anyhow::Result<Self> {
        let state = MockState {
            meeting_requests: Arc::new(Mutex::new(Vec::new())),
            token_requests: Arc::new(Mutex::new(Vec::new())),
            meeting_response: Arc::new(Mutex::new((
                StatusCode::CREATED,
                json!({"id": 85746065432_i64, "topic": "Mock meeting"}),
            ))),
            token_response: Arc::new(Mutex::new((
                StatusCode::OK,
                json!({"access_token": "server-token", "token_type": "bearer"}),
            ))),
        };

        let app = Router::new()
            .route("/v2/users/me/meetings", post(handle_meeting))
            .route("/oauth/token", post(handle_token))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            api_base: format!("http://127.0.0.1:{}/v2", port),
            token_url: format!("http://127.0.0.1:{}/oauth/token", port),
            state,
            _server_handle: server_handle,
        })
    }

    pub fn set_meeting_response(&self, status: StatusCode, body: JsonValue) {
        *self.state.meeting_response.lock().unwrap() = (status, body);
    }

    pub fn set_token_response(&self, status: StatusCode, body: JsonValue) {
        *self.state.token_response.lock().unwrap() = (status, body);
    }

    pub fn meeting_requests(&self) -> Vec<RecordedRequest> {
        self.state.meeting_requests.lock().unwrap().clone()
    }

    pub fn token_requests(&self) -> Vec<RecordedRequest> {
        self.state.token_requests.lock().unwrap().clone()
    }
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

async fn handle_meeting(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<JsonValue>,
) -> (StatusCode, Json<JsonValue>) {
    state.meeting_requests.lock().unwrap().push(RecordedRequest {
        authorization: authorization(&headers),
        body,
    });
    let (status, body) = state.meeting_response.lock().unwrap().clone();
    (status, Json(body))
}

async fn handle_token(
    State(state): State<MockState>,
    headers: HeaderMap,
) -> (StatusCode, Json<JsonValue>) {
    state.token_requests.lock().unwrap().push(RecordedRequest {
        authorization: authorization(&headers),
        body: JsonValue::Null,
    });
    let (status, body) = state.token_response.lock().unwrap().clone();
    (status, Json(body))
}

pub fn test_config(zoom: &MockZoom) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        cron_secret: Some(CRON_SECRET.to_string()),
        zoom: ZoomConfig {
            api_base: zoom.api_base.clone(),
            token_url: zoom.token_url.clone(),
            credentials: Some(AccountCredentials {
                account_id: "acct-123".to_string(),
                client_id: "client-id".to_string(),
                client_secret: "client-secret".to_string(),
            }),
        },
        weekly: WeeklyMeetingConfig::default(),
    }
}

pub struct TestFixture {
    pub app: Router,
    pub zoom: MockZoom,
}

pub async fn setup_test_fixture() -> anyhow::Result<TestFixture> {
    setup_with(|_| {}).await
}

pub async fn setup_with<F>(adjust: F) -> anyhow::Result<TestFixture>
where
    F: FnOnce(&mut Config),
{
    let zoom = MockZoom::start().await?;
    let mut config = test_config(&zoom);
    adjust(&mut config);
    let app = create_app(AppState::new(config));
    Ok(TestFixture { app, zoom })
}
