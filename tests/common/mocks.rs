use async_trait::async_trait;
use cardamom_client::transport::{RawResponse, Transport, TransportFailure, Upload};
use std::sync::{Arc, Mutex};

type Outcome = Result<RawResponse, TransportFailure>;

/// Mock transport for testing. Replays scripted outcomes in order and records
/// every call it receives.
#[derive(Debug, Clone)]
pub struct MockTransport {
    pub outcomes: Arc<Mutex<Vec<Outcome>>>,
    pub uploads: Arc<Mutex<Vec<(String, Upload)>>>,
    pub gets: Arc<Mutex<Vec<String>>>,
    pub base_url: Arc<Mutex<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            uploads: Arc::new(Mutex::new(Vec::new())),
            gets: Arc::new(Mutex::new(Vec::new())),
            base_url: Arc::new(Mutex::new("http://mock.local:8000".to_string())),
        }
    }

    pub fn with_response(self, response: RawResponse) -> Self {
        self.outcomes.lock().unwrap().push(Ok(response));
        self
    }

    pub fn with_failure(self, failure: TransportFailure) -> Self {
        self.outcomes.lock().unwrap().push(Err(failure));
        self
    }

    pub fn get_uploads(&self) -> Vec<(String, Upload)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn get_gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    fn next_outcome(&self) -> Outcome {
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(TransportFailure::NoResponse(
                "No more mock responses available".to_string(),
            ));
        }
        outcomes.remove(0)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, path: &str, upload: Upload) -> Result<RawResponse, TransportFailure> {
        self.uploads.lock().unwrap().push((path.to_string(), upload));
        self.next_outcome()
    }

    async fn get(&self, path: &str) -> Result<RawResponse, TransportFailure> {
        self.gets.lock().unwrap().push(path.to_string());
        self.next_outcome()
    }

    fn base_url(&self) -> String {
        self.base_url.lock().unwrap().clone()
    }

    fn set_base_url(&self, base_url: &str) {
        *self.base_url.lock().unwrap() = base_url.to_string();
    }
}
