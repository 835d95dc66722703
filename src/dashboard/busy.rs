//! Busy animation for buttons with a request in flight
//!
//! The label cycles through a small fixed set of dot frames until the owning
//! controller finishes the animation, which restores the original label once.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Frames shown while busy; an empty frame is rendered as "..."
pub const BUSY_FRAMES: [&str; 4] = ["", ".", "..", "..."];

/// Default frame period
pub const BUSY_FRAME_INTERVAL: Duration = Duration::from_millis(400);

type LabelSetter = Arc<dyn Fn(&str) + Send + Sync>;

fn frame_label(index: usize) -> &'static str {
    let frame = BUSY_FRAMES[index % BUSY_FRAMES.len()];
    if frame.is_empty() { "..." } else { frame }
}

/// A running animation bound to one label.
///
/// Dropping the handle without calling [`BusyAnimation::finish`] stops the
/// timer and restores the label as well.
pub struct BusyAnimation {
    ticker: Option<JoinHandle<()>>,
    setter: LabelSetter,
    original: String,
}

impl BusyAnimation {
    /// Start animating. Must be called inside a tokio runtime.
    pub fn start<F>(original: impl Into<String>, interval: Duration, setter: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let setter: LabelSetter = Arc::new(setter);
        setter("...");

        let tick_setter = setter.clone();
        let ticker = tokio::spawn(async move {
            let mut frame = 0usize;
            let mut ticks = tokio::time::interval(interval);
            ticks.tick().await;
            loop {
                ticks.tick().await;
                frame = (frame + 1) % BUSY_FRAMES.len();
                tick_setter(frame_label(frame));
            }
        });

        Self {
            ticker: Some(ticker),
            setter,
            original: original.into(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Stop the timer and put the original label back
    pub fn finish(mut self) {
        self.stop(true);
    }

    /// Stop the timer without touching the label
    pub fn cancel(mut self) {
        self.stop(false);
    }

    fn stop(&mut self, restore: bool) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            if restore {
                (self.setter)(&self.original);
            }
        }
    }
}

impl Drop for BusyAnimation {
    fn drop(&mut self) {
        self.stop(true);
    }
}

/// Identifies one `begin` on a [`BusySlot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyTicket(u64);

/// Per-control slot holding at most one animation.
///
/// A second `begin` while one is running takes over the label; the original
/// text is carried over so the eventual `end` restores the real label, not a
/// dot frame. Only the ticket of the latest `begin` can end the animation.
#[derive(Default)]
pub struct BusySlot {
    current: Mutex<Option<(BusyTicket, BusyAnimation)>>,
    issued: AtomicU64,
}

impl BusySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin<F>(&self, label: &str, interval: Duration, setter: F) -> BusyTicket
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let ticket = BusyTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1);
        let mut current = self.current.lock();
        let original = match current.take() {
            Some((_, running)) => {
                let original = running.original().to_string();
                running.cancel();
                original
            }
            None => label.to_string(),
        };
        *current = Some((ticket, BusyAnimation::start(original, interval, setter)));
        ticket
    }

    /// Finish the animation if `ticket` still owns it. Returns whether it did
    pub fn end(&self, ticket: BusyTicket) -> bool {
        let running = {
            let mut current = self.current.lock();
            match current.as_ref() {
                Some((owner, _)) if *owner == ticket => current.take(),
                _ => None,
            }
        };
        match running {
            Some((_, running)) => {
                running.finish();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.lock().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        (log, move |label: &str| sink.lock().push(label.to_string()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycles_frames_every_interval() {
        let (log, setter) = recorder();
        let anim = BusyAnimation::start("Старт", BUSY_FRAME_INTERVAL, setter);

        tokio::time::sleep(Duration::from_millis(1250)).await;
        anim.finish();

        let labels = log.lock().clone();
        assert_eq!(labels, vec!["...", ".", "..", "...", "Старт"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restores_exactly_once() {
        let (log, setter) = recorder();
        let anim = BusyAnimation::start("Поиск", BUSY_FRAME_INTERVAL, setter);
        tokio::time::sleep(Duration::from_millis(500)).await;
        anim.finish();
        tokio::time::sleep(Duration::from_secs(2)).await;

        let labels = log.lock().clone();
        assert_eq!(labels.iter().filter(|l| *l == "Поиск").count(), 1);
        assert_eq!(labels.last().map(String::as_str), Some("Поиск"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_restores_label() {
        let (log, setter) = recorder();
        {
            let _anim = BusyAnimation::start("Скачать", BUSY_FRAME_INTERVAL, setter);
        }
        assert_eq!(log.lock().last().map(String::as_str), Some("Скачать"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slot_keeps_first_original() {
        let slot = BusySlot::new();
        let (log, setter) = recorder();
        let setter = Arc::new(setter);

        let s1 = setter.clone();
        slot.begin("Найти", BUSY_FRAME_INTERVAL, move |l| s1(l));
        let s2 = setter.clone();
        // second begin sees the dotted label, but the slot remembers "Найти"
        let latest = slot.begin("...", BUSY_FRAME_INTERVAL, move |l| s2(l));
        assert!(slot.is_running());

        assert!(slot.end(latest));
        assert!(!slot.is_running());
        assert_eq!(log.lock().last().map(String::as_str), Some("Найти"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_ticket_cannot_end() {
        let slot = BusySlot::new();
        let (log, setter) = recorder();
        let setter = Arc::new(setter);

        let s1 = setter.clone();
        let first = slot.begin("Найти", BUSY_FRAME_INTERVAL, move |l| s1(l));
        let s2 = setter.clone();
        let second = slot.begin("...", BUSY_FRAME_INTERVAL, move |l| s2(l));

        assert!(!slot.end(first));
        assert!(slot.is_running());
        assert_ne!(log.lock().last().map(String::as_str), Some("Найти"));

        assert!(slot.end(second));
        assert!(!slot.end(second));
        assert_eq!(log.lock().last().map(String::as_str), Some("Найти"));
    }
}
