//! Scripted transport for gateway and controller tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{HttpReply, LoginTransport, TransportError};

/// Replays queued replies in order and records every request it saw.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
    pub(crate) requests: RefCell<Vec<(String, serde_json::Value)>>,
}

impl ScriptedTransport {
    pub(crate) fn replying(status: u16, body: serde_json::Value) -> Self {
        let transport = Self::default();
        transport.push(status, body);
        transport
    }

    pub(crate) fn failing(message: &str) -> Self {
        let transport = Self::default();
        transport
            .replies
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
        transport
    }

    pub(crate) fn push(&self, status: u16, body: serde_json::Value) {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply { status, body: body.to_string() }));
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply { status, body: body.to_owned() }));
    }
}

#[async_trait::async_trait(?Send)]
impl LoginTransport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, TransportError> {
        self.requests
            .borrow_mut()
            .push((url.to_owned(), body.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}
