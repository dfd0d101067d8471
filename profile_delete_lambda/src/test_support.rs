use axum::{
    Router,
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

/// Local stand-in for the profile backend. Answers every request with a
/// fixed status and body and records what it received.
pub struct MockBackend {
    pub url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockBackend {
    pub async fn spawn(status: StatusCode, body: &'static str) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&calls);

        let app = Router::new().fallback(
            move |method: Method, uri: Uri, headers: HeaderMap| {
                let recorder = Arc::clone(&recorder);
                async move {
                    let header_value = |name: header::HeaderName| {
                        headers
                            .get(name)
                            .and_then(|value| value.to_str().ok())
                            .map(str::to_string)
                    };
                    recorder.lock().unwrap().push(RecordedCall {
                        method,
                        query: uri.query().map(str::to_string),
                        authorization: header_value(header::AUTHORIZATION),
                        content_type: header_value(header::CONTENT_TYPE),
                    });
                    (status, body)
                }
            },
        );

        let listener =
            tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/profiles", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, calls }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}
