use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

/// Quiet period between the last keystroke and the search request.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Collapses a burst of inputs into the trailing one.
///
/// Every call to [`Debouncer::settle`] supersedes the calls still waiting, so
/// only the last value of a burst comes back once the delay has passed.
#[derive(Clone, Debug)]
pub struct Debouncer {
    latest: Arc<AtomicU64>,
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            latest: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the delay using `sleep`, then yields `value` unless a newer
    /// input arrived in the meantime.
    pub async fn settle<T, F, Fut>(&self, value: T, sleep: F) -> Option<T>
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        sleep(self.delay).await;
        (self.latest.load(Ordering::SeqCst) == ticket).then_some(value)
    }

    /// Drops whatever is pending.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use tokio::time::sleep;

    /// Feeds `text` to the debouncer the way the search box does: one task
    /// per keystroke, each reporting the value it settled on.
    fn type_text(debouncer: &Debouncer, fired: &Arc<Mutex<Vec<String>>>, text: &str) {
        let debouncer = debouncer.clone();
        let fired = fired.clone();
        let text = text.to_string();
        tokio::spawn(async move {
            if let Some(value) = debouncer.settle(text, sleep).await {
                fired.lock().unwrap().push(value);
            }
        });
    }

    #[tokio::test(start_paused = true)]
    async fn burst_fires_once_with_last_value() {
        let debouncer = Debouncer::default();
        let fired = Arc::new(Mutex::new(Vec::new()));

        type_text(&debouncer, &fired, "ann");
        sleep(Duration::from_millis(100)).await;
        type_text(&debouncer, &fired, "anna");
        sleep(Duration::from_millis(600)).await;

        assert_eq!(*fired.lock().unwrap(), vec!["anna".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_fires_inside_quiet_window() {
        let debouncer = Debouncer::default();
        let fired = Arc::new(Mutex::new(Vec::new()));

        type_text(&debouncer, &fired, "a");
        sleep(Duration::from_millis(499)).await;
        assert!(fired.lock().unwrap().is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["a".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_fire_separately() {
        let debouncer = Debouncer::default();
        let fired = Arc::new(Mutex::new(Vec::new()));

        type_text(&debouncer, &fired, "ann");
        sleep(Duration::from_millis(600)).await;
        type_text(&debouncer, &fired, "anna");
        sleep(Duration::from_millis(600)).await;

        assert_eq!(
            *fired.lock().unwrap(),
            vec!["ann".to_string(), "anna".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_value() {
        let debouncer = Debouncer::default();
        let fired = Arc::new(Mutex::new(Vec::new()));

        type_text(&debouncer, &fired, "ann");
        sleep(Duration::from_millis(100)).await;
        debouncer.cancel();
        sleep(Duration::from_millis(600)).await;

        assert!(fired.lock().unwrap().is_empty());
    }
}
