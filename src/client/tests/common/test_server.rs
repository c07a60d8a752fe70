use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct Received {
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct ServerState {
    received: Arc<Mutex<Vec<Received>>>,
    status: StatusCode,
    reply: Value,
}

/// Stand-in log backend: records every POST to `/log` and answers with a
/// fixed status and JSON body.
pub struct TestServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
    handle: JoinHandle<()>,
}

async fn record(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let api_key = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.received.lock().unwrap().push(Received { api_key, body });
    (state.status, Json(state.reply.clone()))
}

impl TestServer {
    pub async fn launch(status: StatusCode, reply: Value) -> anyhow::Result<Self> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            received: Arc::clone(&received),
            status,
            reply,
        };
        let app = Router::new().route("/log", post(record)).with_state(state);

        // 0: means port will be picked by the OS
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            received,
            handle,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}/log", self.addr)
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
