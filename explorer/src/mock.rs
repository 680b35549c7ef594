use std::collections::VecDeque;
use std::sync::Mutex;

use url::Url;

use crate::client::Explorer;
use crate::error::TransportError;
use crate::transport::{RawResponse, Transport};

pub const TEST_BASE: &str = "https://explorer.test/api";

/// Replays canned responses in order and records every requested URL.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, String>>>,
    pub requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body.to_string())));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn last_url(&self) -> Url {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }

    pub fn param(&self, key: &str) -> Option<String> {
        self.last_url()
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(url.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(msg)) => Err(TransportError::Other(msg)),
            None => Err(TransportError::Other("no canned response".into())),
        }
    }
}

/// Explorer over a transport that answers once with a `status: "1"` envelope.
pub fn ok_envelope(result: &str) -> Explorer<MockTransport> {
    let body = format!(r#"{{"status":"1","message":"OK","result":{result}}}"#);
    explorer(MockTransport::default().reply(200, &body))
}

pub fn explorer(transport: MockTransport) -> Explorer<MockTransport> {
    Explorer::with_transport(TEST_BASE, transport).unwrap()
}
