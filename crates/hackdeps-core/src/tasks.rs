//! Fan-out/fan-in task group with first-error cancellation
//!
//! Every task shares one [`CancellationToken`]. The first task to fail
//! cancels it, which aborts the network calls of its siblings; the group
//! still waits for every task to settle before reporting that first error.

use std::future::Future;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A set of independent tasks joined by a single barrier
pub struct TaskGroup<T> {
    tasks: JoinSet<(usize, Result<T>)>,
    cancel: CancellationToken,
    spawned: usize,
}

impl<T: Send + 'static> TaskGroup<T> {
    /// Create a group with its own cancellation token
    pub fn new() -> Self {
        Self::with_token(CancellationToken::new())
    }

    /// Create a group that is also cancelled when `parent` is
    pub fn with_parent(parent: &CancellationToken) -> Self {
        Self::with_token(parent.child_token())
    }

    fn with_token(cancel: CancellationToken) -> Self {
        Self {
            tasks: JoinSet::new(),
            cancel,
            spawned: 0,
        }
    }

    /// Token to pass into task bodies
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Number of tasks spawned so far
    pub fn len(&self) -> usize {
        self.spawned
    }

    /// Whether no task has been spawned
    pub fn is_empty(&self) -> bool {
        self.spawned == 0
    }

    /// Start a task
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let index = self.spawned;
        self.spawned += 1;
        self.tasks.spawn(async move { (index, task.await) });
    }

    /// Wait for every task and return their values in spawn order
    ///
    /// Returns the first error observed. Errors caused by the resulting
    /// cancellation are discarded.
    pub async fn join(mut self) -> Result<Vec<T>> {
        let mut values: Vec<(usize, T)> = Vec::with_capacity(self.spawned);
        let mut first_error: Option<Error> = None;

        while let Some(joined) = self.tasks.join_next().await {
            let outcome = match joined {
                Ok((index, result)) => result.map(|value| (index, value)),
                Err(e) => Err(Error::Task(e.to_string())),
            };

            match outcome {
                Ok(value) => values.push(value),
                Err(e) if first_error.is_some() => {
                    debug!("Discarding error after first failure: {}", e);
                }
                Err(e) => {
                    if !self.cancel.is_cancelled() {
                        warn!("{}; cancelling remaining tasks", e);
                        self.cancel.cancel();
                    }
                    first_error = Some(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        values.sort_by_key(|(index, _)| *index);
        Ok(values.into_iter().map(|(_, value)| value).collect())
    }
}

impl<T: Send + 'static> Default for TaskGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}
