use crate::core::{Block, LogSink, TransportError, WebhookResponse, WebhookTransport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Fake webhook transport for testing
///
/// Records every payload it is asked to send and answers from a queue of
/// canned responses. Once the queue is drained it answers `200 ok`.
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<Result<WebhookResponse, String>>>>,
    sent: Arc<Mutex<Vec<Vec<Block>>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A transport whose first answer has the given status and body.
    pub fn responding(status_code: u16, body: &str) -> Self {
        let transport = Self::new();
        transport.add_response(status_code, body);
        transport
    }

    /// Queue an HTTP response
    pub fn add_response(&self, status_code: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(WebhookResponse {
            status_code,
            body: body.to_string(),
        }));
    }

    /// Queue a transport failure
    pub fn add_error(&self, error: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(error.to_string()));
    }

    /// Every payload passed to `send`, in call order
    pub fn sent_payloads(&self) -> Vec<Vec<Block>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookTransport for FakeTransport {
    fn send(&self, blocks: &[Block]) -> Result<WebhookResponse, TransportError> {
        self.sent.lock().unwrap().push(blocks.to_vec());

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(error)) => Err(error.into()),
            None => Ok(WebhookResponse {
                status_code: 200,
                body: "ok".to_string(),
            }),
        }
    }
}

/// A `LogSink` that keeps every line in memory.
#[derive(Clone, Default)]
pub struct RecordingLogSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// True if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|line| line.contains(needle))
    }
}

impl LogSink for RecordingLogSink {
    fn info(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
