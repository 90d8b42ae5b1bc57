//! Scripted `TextModel` used by unit and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{LlmError, TextModel};

type Responder = dyn Fn(&str) -> Result<String, LlmError> + Send + Sync;

pub struct StubModel {
    responder: Box<Responder>,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always answers with `reply`.
    pub fn replying(reply: &str) -> Self {
        let reply = reply.to_string();
        Self::new(move |_| Ok(reply.clone()))
    }

    /// Always fails as if the API were unreachable.
    pub fn failing() -> Self {
        Self::new(|_| {
            Err(LlmError::Api {
                status: 503,
                message: "model unavailable".to_string(),
            })
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextModel for StubModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.responder)(prompt)
    }
}
