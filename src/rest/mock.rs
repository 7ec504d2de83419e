//! Recording transport shared by the resource unit tests.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use crate::clients::{HttpRequest, HttpResponse, Transport, TransportError};

/// Records every request and answers with a fixed response, or fails with a
/// fixed I/O error kind.
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    failure: Option<io::ErrorKind>,
    response: HttpResponse,
}

impl RecordingTransport {
    pub fn ok() -> Self {
        Self::responding(HttpResponse::new(200, HashMap::new(), r#"{"status":"ok"}"#))
    }

    pub fn responding(response: HttpResponse) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failure: None,
            response,
        }
    }

    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            failure: Some(kind),
            ..Self::ok()
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request was recorded")
    }
}

impl Transport for RecordingTransport {
    async fn make_request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match self.failure {
            Some(kind) => Err(TransportError::new(io::Error::new(kind, "mock transport failure"))),
            None => Ok(self.response.clone()),
        }
    }
}
