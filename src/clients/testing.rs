//! In-memory transport for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::clients::{HttpClient, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::config::ClientConfig;

/// Replays canned responses in order and records every request it receives.
#[derive(Debug, Default)]
pub(crate) struct StubTransport {
    responses: Mutex<Vec<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub(crate) fn replying(status: u16, headers: &[(&str, &str)], body: &str) -> Arc<Self> {
        let stub = Arc::new(Self::default());
        stub.push(status, headers, body);
        stub
    }

    pub(crate) fn failing(message: &str) -> Arc<Self> {
        let stub = Arc::new(Self::default());
        stub.responses
            .lock()
            .unwrap()
            .push(Err(TransportError::new(message)));
        stub
    }

    pub(crate) fn push(&self, status: u16, headers: &[(&str, &str)], body: &str) {
        let headers = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect::<HashMap<_, _>>();
        self.responses
            .lock()
            .unwrap()
            .push(Ok(HttpResponse::new(status, headers, body.to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(TransportError::new("no canned response left"));
        }
        responses.remove(0)
    }
}

/// Builds a client over a stub that answers once with `body` and status 200.
pub(crate) fn stub_client(config: ClientConfig, body: &str) -> (HttpClient, Arc<StubTransport>) {
    let transport = StubTransport::replying(200, &[], body);
    (HttpClient::with_transport(config, transport.clone()), transport)
}
