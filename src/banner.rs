//! Transient banner messages
//!
//! Business-rule and storage failures are shown as a single banner that
//! disappears after a fixed delay. Showing a new banner replaces the old
//! one and restarts the delay.

use std::time::{Duration, Instant};

/// Default time a banner stays visible
pub const DEFAULT_BANNER_TIMEOUT: Duration = Duration::from_secs(5);

/// Kind of banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A message with an expiry
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub kind: BannerKind,
    shown_at: Instant,
    timeout: Duration,
}

impl Banner {
    pub fn new(message: impl Into<String>, kind: BannerKind, shown_at: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
            timeout: DEFAULT_BANNER_TIMEOUT,
        }
    }

    pub fn error(message: impl Into<String>, shown_at: Instant) -> Self {
        Self::new(message, BannerKind::Error, shown_at)
    }

    pub fn success(message: impl Into<String>, shown_at: Instant) -> Self {
        Self::new(message, BannerKind::Success, shown_at)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.timeout
    }

    /// Time left before the banner clears
    pub fn remaining(&self, now: Instant) -> Duration {
        self.timeout
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}

/// The one place a banner is shown
#[derive(Debug, Default)]
pub struct BannerSlot {
    current: Option<Banner>,
}

impl BannerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a banner, superseding whatever was visible
    pub fn show(&mut self, banner: Banner) {
        self.current = Some(banner);
    }

    /// The visible banner at `now`, clearing it once expired
    pub fn current(&mut self, now: Instant) -> Option<&Banner> {
        if self.current.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
