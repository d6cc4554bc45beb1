//! Validation runtime.
//!
//! Bridges the sync game loop with async lexicon lookups. Each request runs as
//! its own task; answers come back over a channel the loop drains every frame.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::warn;

use tile_words_types::{ValidationRequest, ValidationTicket};

use crate::error::LookupError;
use crate::validator::WordValidator;

/// Answer delivered to the game loop, tagged with the request's ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub ticket: ValidationTicket,
    pub word: String,
    pub accepted: bool,
}

/// Running validation runtime
pub struct ValidationRuntime {
    rt: Runtime,
    validator: Arc<dyn WordValidator>,
    timeout: Duration,
    out_tx: mpsc::UnboundedSender<ValidationOutcome>,
    out_rx: mpsc::UnboundedReceiver<ValidationOutcome>,
}

impl ValidationRuntime {
    pub fn new(validator: Arc<dyn WordValidator>, timeout: Duration) -> Result<Self> {
        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        Ok(Self {
            rt,
            validator,
            timeout,
            out_tx,
            out_rx,
        })
    }

    pub fn validator_name(&self) -> &'static str {
        self.validator.name()
    }

    /// Start validating `request`. The answer shows up in [`Self::try_recv`];
    /// a lookup that outlives the timeout is answered with a rejection.
    pub fn submit(&self, request: ValidationRequest) {
        let validator = Arc::clone(&self.validator);
        let out_tx = self.out_tx.clone();
        let timeout = self.timeout;

        self.rt.spawn(async move {
            let ValidationRequest { ticket, word } = request;
            let accepted = match tokio::time::timeout(timeout, validator.validate(&word)).await {
                Ok(accepted) => accepted,
                Err(_) => {
                    let err = LookupError::Timeout {
                        timeout_ms: timeout.as_millis() as u64,
                    };
                    warn!(word = %word, error = %err, "validation abandoned");
                    false
                }
            };
            let _ = out_tx.send(ValidationOutcome {
                ticket,
                word,
                accepted,
            });
        });
    }

    pub fn try_recv(&mut self) -> Option<ValidationOutcome> {
        self.out_rx.try_recv().ok()
    }

    /// Block for the next answer, up to `wait`.
    pub fn recv_timeout(&mut self, wait: Duration) -> Option<ValidationOutcome> {
        let rx = &mut self.out_rx;
        self.rt
            .block_on(async move { tokio::time::timeout(wait, rx.recv()).await.ok().flatten() })
    }
}
