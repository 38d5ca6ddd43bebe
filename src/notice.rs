use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// A one-line notice (e.g. "Added to cart!") that clears itself.
///
/// Watchers see `Some(text)` while the notice is up and `None` otherwise.
#[derive(Clone)]
pub struct Notice {
    state: Arc<watch::Sender<Option<String>>>,
}

impl Notice {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.state.subscribe()
    }

    pub fn current(&self) -> Option<String> {
        self.state.borrow().clone()
    }

    /// Shows `text` and schedules it to clear after `dismiss_after`.
    ///
    /// The timer lives as long as the returned guard. Dropping the guard
    /// cancels it, so a torn-down view is never written to.
    #[instrument(skip(self, text), fields(dismiss_ms = u64::try_from(dismiss_after.as_millis()).unwrap_or(u64::MAX)))]
    pub fn show(&self, text: impl Into<String>, dismiss_after: Duration) -> NoticeGuard {
        self.state.send_replace(Some(text.into()));
        let state = Arc::clone(&self.state);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            state.send_replace(None);
            debug!("Notice dismissed");
        });
        NoticeGuard { timer }
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancels the dismiss timer when dropped.
#[must_use = "dropping the guard cancels the dismiss timer"]
pub struct NoticeGuard {
    timer: JoinHandle<()>,
}

impl NoticeGuard {
    pub fn is_pending(&self) -> bool {
        !self.timer.is_finished()
    }
}

impl Drop for NoticeGuard {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn notice_clears_after_delay() {
        let notice = Notice::new();
        let guard = notice.show("Added to cart!", Duration::from_millis(2000));
        assert_eq!(notice.current().as_deref(), Some("Added to cart!"));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(notice.current().as_deref(), Some("Added to cart!"));

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(notice.current(), None);
        assert!(!guard.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_guard_never_fires() {
        let notice = Notice::new();
        let mut watcher = notice.subscribe();
        let guard = notice.show("Added to cart!", Duration::from_millis(2000));
        watcher.borrow_and_update();
        drop(guard);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(notice.current().as_deref(), Some("Added to cart!"));
        assert!(!watcher.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_a_notice_cancels_the_old_timer() {
        let notice = Notice::new();
        let first = notice.show("Added to cart!", Duration::from_millis(2000));
        tokio::time::sleep(Duration::from_millis(1500)).await;
        drop(first);
        let _second = notice.show("Listing posted", Duration::from_millis(2000));

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(notice.current().as_deref(), Some("Listing posted"));
    }

    #[tokio::test(start_paused = true)]
    async fn very_long_delay_keeps_notice_up() {
        let notice = Notice::new();
        let guard = notice.show("Added to cart!", Duration::MAX);

        tokio::time::sleep(Duration::from_secs(365 * 24 * 3600)).await;
        assert_eq!(notice.current().as_deref(), Some("Added to cart!"));
        assert!(guard.is_pending());
    }
}
