//! Runs the shell reducer against a [`NewsSource`].
//!
//! Fetch effects are spawned onto the tokio runtime and their outcome comes
//! back as an [`Action`] on a channel, so the caller keeps handling input and
//! redrawing while a request is in flight.

use std::sync::Arc;

use nd_core::shell::{self, Action, Effect, UiState};
use tokio::sync::mpsc;

use crate::NewsSource;

pub struct Session<S: NewsSource + 'static> {
    source: Arc<S>,
    state: UiState,
    completions_tx: mpsc::UnboundedSender<Action>,
    completions_rx: mpsc::UnboundedReceiver<Action>,
}

impl<S: NewsSource + 'static> Session<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self::with_state(source, UiState::default())
    }

    pub fn with_state(source: Arc<S>, state: UiState) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            source,
            state,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Applies an action and starts the fetch it asks for, if any.
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, action: Action) {
        if let Some(effect) = shell::update(&mut self.state, action) {
            self.spawn(effect);
        }
    }

    fn spawn(&self, effect: Effect) {
        match effect {
            Effect::Fetch {
                generation,
                request,
            } => {
                let source = Arc::clone(&self.source);
                let tx = self.completions_tx.clone();
                tokio::spawn(async move {
                    let action = match source.fetch_page(&request).await {
                        Ok(result) => Action::Loaded { generation, result },
                        Err(e) => Action::Failed {
                            generation,
                            message: e.to_string(),
                        },
                    };
                    // The receiver lives as long as the session.
                    let _ = tx.send(action);
                });
            }
        }
    }

    /// Waits for the next fetch to finish, without applying it.
    pub async fn next_completion(&mut self) -> Option<Action> {
        self.completions_rx.recv().await
    }

    /// Applies completions until the shell leaves the loading phase.
    pub async fn settle(&mut self) {
        while self.state.is_loading() {
            match self.completions_rx.recv().await {
                Some(action) => self.dispatch(action),
                None => break,
            }
        }
    }

    /// Applies completions that have already arrived.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.completions_rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }
}
