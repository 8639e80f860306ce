use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Notice,
}

/// Short-lived on-screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn error(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Error,
            expires_at: now + ttl,
        }
    }

    pub fn notice(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Notice,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Display lifetimes for toasts, taken from the `[messages]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub error: Duration,
    pub notice: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            error: Duration::from_millis(3000),
            notice: Duration::from_millis(5000),
        }
    }
}

/// Drop the toast in `slot` once it has expired.
pub fn expire(slot: Option<Toast>, now: Instant) -> Option<Toast> {
    slot.filter(|toast| !toast.is_expired(now))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_ttl() {
        let now = Instant::now();
        let toast = Toast::error("Garage is full!", now, Duration::from_secs(3));
        assert!(expire(Some(toast.clone()), now + Duration::from_millis(2999)).is_some());
        assert!(expire(Some(toast), now + Duration::from_secs(3)).is_none());
    }
}
