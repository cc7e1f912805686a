//! Test fixtures shared by the HTTP integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use agenda_server::ui::{build_router, state::AppState};
use tokio::{net::TcpListener, task::JoinHandle};

/// An in-process server on an ephemeral port with empty in-memory storage.
///
/// The server task is aborted on drop.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let app = build_router(Arc::new(AppState::in_memory()));

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Create a user and assert it was accepted.
pub async fn create_user(client: &reqwest::Client, server: &TestServer, name: &str, email: &str) {
    let response = client
        .post(format!("{}/users", server.base_url()))
        .json(&serde_json::json!({"name": name, "email": email}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201, "create user {name} <{email}>");
}
