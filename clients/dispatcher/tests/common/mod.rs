use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Notify};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: JsonValue,
}

/// One canned answer of the mock scheduling service.
#[derive(Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: String,
    pub content_type: &'static str,
    pub release: Option<Arc<Notify>>,
}

impl MockReply {
    pub fn json(status: StatusCode, body: JsonValue) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "application/json",
            release: None,
        }
    }

    pub fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "text/html",
            release: None,
        }
    }

    /// Holds the reply back until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.release = Some(Arc::clone(&gate));
        (self, gate)
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    default_reply: MockReply,
    arrivals: mpsc::UnboundedSender<usize>,
}

/// Stand-in for the scheduling service. Replies are handed out in request
/// arrival order; once the queue is empty the default reply is used.
pub struct MockSchedulingService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    arrivals: tokio::sync::Mutex<mpsc::UnboundedReceiver<usize>>,
    _server_handle: tokio::task::JoinHandle<()>,
}

impl MockSchedulingService {
    pub async fn start(default_reply: MockReply) -> anyhow::Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let replies = Arc::new(Mutex::new(VecDeque::new()));
        let (tx, rx) = mpsc::unbounded_channel();

        let state = MockState {
            requests: Arc::clone(&requests),
            replies: Arc::clone(&replies),
            default_reply,
            arrivals: tx,
        };

        let app = Router::new()
            .route("/schedule-meeting/", post(handle_schedule))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
            replies,
            arrivals: tokio::sync::Mutex::new(rx),
            _server_handle: server_handle,
        })
    }

    pub fn push_reply(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Waits until the next request has reached the service.
    pub async fn next_arrival(&self) -> usize {
        let mut rx = self.arrivals.lock().await;
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("no request reached the mock service")
            .expect("mock service stopped")
    }
}

async fn handle_schedule(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    let index = {
        let mut requests = state.requests.lock().unwrap();
        requests.push(RecordedRequest {
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(String::from),
            body: serde_json::from_slice(&body).unwrap_or(JsonValue::Null),
        });
        requests.len() - 1
    };

    let reply = state
        .replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| state.default_reply.clone());

    let _ = state.arrivals.send(index);

    if let Some(gate) = &reply.release {
        gate.notified().await;
    }

    (reply.status, [(CONTENT_TYPE, reply.content_type)], reply.body).into_response()
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
