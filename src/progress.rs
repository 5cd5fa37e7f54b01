//! Read progress derived from the viewport's scroll position.

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadingProgress {
    /// Always within `0.0..=100.0`.
    pub scroll_percent: f64,
}

impl ReadingProgress {
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            scroll_percent: scroll_percent(viewport),
        }
    }
}

/// `scroll_top` as a percentage of the scrollable distance.
///
/// Content that fits in the viewport has nothing to scroll and reads as `0`.
pub fn scroll_percent(viewport: &Viewport) -> f64 {
    let scrollable = viewport.scroll_height - viewport.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let percent = viewport.scroll_top / scrollable * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Publishes scroll positions of one screen.
///
/// Only the latest viewport is retained, so a burst of scroll events reaches a
/// slow subscriber as a single recomputation.
pub struct ScrollSource {
    tx: watch::Sender<Viewport>,
}

impl ScrollSource {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Viewport::default());
        Self { tx }
    }

    pub fn scroll_to(&self, viewport: Viewport) {
        self.tx.send_replace(viewport);
    }

    pub fn subscribe(&self) -> ProgressSubscription {
        ProgressSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ScrollSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped listener; dropping it unsubscribes.
pub struct ProgressSubscription {
    rx: watch::Receiver<Viewport>,
}

impl ProgressSubscription {
    pub fn current(&self) -> ReadingProgress {
        ReadingProgress::from_viewport(&self.rx.borrow())
    }

    /// Waits for the next scroll change. `None` once the source is gone.
    pub async fn changed(&mut self) -> Option<ReadingProgress> {
        self.rx.changed().await.ok()?;
        let viewport = *self.rx.borrow_and_update();
        Some(ReadingProgress::from_viewport(&viewport))
    }
}
