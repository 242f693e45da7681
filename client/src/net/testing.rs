//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::TransportError;
use super::transport::{ApiReply, ApiRequest, Transport};

/// Replays queued replies in order and records every request it sees.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<ApiReply, TransportError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiReply { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}
