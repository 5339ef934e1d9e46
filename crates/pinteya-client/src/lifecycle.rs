//! Cancellation of in-flight fetches when a quick view closes.
//!
//! Each [`ModalLifecycle::open`] starts a new generation and hands out a
//! [`LifecycleToken`] bound to it. Closing the modal, opening it again, or
//! dropping the lifecycle cancels every token from earlier generations, so
//! a slow response for a previous product is never applied.

use std::future::Future;

use tokio::sync::watch;

use crate::error::ClientError;

#[derive(Debug)]
pub struct ModalLifecycle {
    generation: watch::Sender<u64>,
}

impl Default for ModalLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalLifecycle {
    #[must_use]
    pub fn new() -> Self {
        let (generation, _) = watch::channel(0);
        Self { generation }
    }

    /// Starts a new modal lifecycle, cancelling the previous one.
    #[must_use]
    pub fn open(&self) -> LifecycleToken {
        self.generation.send_modify(|g| *g += 1);
        LifecycleToken {
            generation: *self.generation.borrow(),
            current: self.generation.subscribe(),
        }
    }

    /// Cancels the current lifecycle.
    pub fn close(&self) {
        self.generation.send_modify(|g| *g += 1);
    }
}

#[derive(Debug, Clone)]
pub struct LifecycleToken {
    generation: u64,
    current: watch::Receiver<u64>,
}

impl LifecycleToken {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.current.has_changed().is_err() || *self.current.borrow() != self.generation
    }

    /// Resolves once this token's lifecycle has ended.
    pub async fn cancelled(&self) {
        let mut current = self.current.clone();
        loop {
            if *current.borrow_and_update() != self.generation {
                return;
            }
            if current.changed().await.is_err() {
                return;
            }
        }
    }

    /// Runs `fut` unless the lifecycle ends first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Cancelled`] if the lifecycle ended before (or
    /// while) `fut` ran.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, ClientError> {
        if self.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        tokio::select! {
            biased;
            () = self.cancelled() => Err(ClientError::Cancelled),
            out = fut => Ok(out),
        }
    }
}
