//! Delayed propagation of rapidly changing input, such as a search box.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::SearchConfig;
use crate::session::Session;

/// Forwards the latest pushed value once no new value has arrived for `delay`.
///
/// The initial value is visible immediately. Must be created inside a Tokio
/// runtime.
pub struct Debouncer<T> {
    input: watch::Sender<T>,
    output: watch::Receiver<T>,
    task: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (input, mut input_rx) = watch::channel(initial.clone());
        let (output_tx, output) = watch::channel(initial);

        let task = tokio::spawn(async move {
            while input_rx.changed().await.is_ok() {
                // Restart the quiet period on every new value.
                loop {
                    match tokio::time::timeout(delay, input_rx.changed()).await {
                        Ok(Ok(())) => continue,
                        Ok(Err(_)) | Err(_) => break,
                    }
                }

                let latest = input_rx.borrow_and_update().clone();
                if output_tx.send(latest).is_err() {
                    break;
                }
            }
        });

        Self {
            input,
            output,
            task,
        }
    }

    pub fn push(&self, value: T) {
        self.input.send_replace(value);
    }

    /// Last value that survived the quiet period.
    pub fn current(&self) -> T {
        self.output.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.clone()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Search box bound to a session's filter store through a [`Debouncer`].
pub struct SearchInput {
    debouncer: Debouncer<String>,
    forward: JoinHandle<()>,
}

impl SearchInput {
    pub fn attach(session: Session, config: &SearchConfig) -> Self {
        let initial = session.filters().search_query;
        let debouncer = Debouncer::new(initial, Duration::from_millis(config.debounce_ms));

        let mut settled = debouncer.subscribe();
        let forward = tokio::spawn(async move {
            while settled.changed().await.is_ok() {
                let query = settled.borrow_and_update().clone();
                tracing::debug!(query = %query, "Applying search query");
                session.set_search_query(query);
            }
        });

        Self { debouncer, forward }
    }

    /// Record a keystroke-level change; the filter store sees it after the delay.
    pub fn type_text(&self, text: impl Into<String>) {
        self.debouncer.push(text.into());
    }

    pub fn current(&self) -> String {
        self.debouncer.current()
    }
}

impl Drop for SearchInput {
    fn drop(&mut self) {
        self.forward.abort();
    }
}
