use dioxus::prelude::*;

/// Delay before an open banner closes by itself.
pub const AUTO_HIDE_MS: u32 = 6000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// daisyUI alert variant for the banner.
    pub fn alert_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Error => "alert-error",
            Severity::Warning => "alert-warning",
            Severity::Info => "alert-info",
        }
    }
}

/// The single transient banner.
///
/// `sequence` increases with every `show` so that a pending auto-hide only closes the banner it
/// was scheduled for.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub open: bool,
    pub sequence: u64,
}

impl Notification {
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.message = message.into();
        self.severity = severity;
        self.open = true;
        self.sequence += 1;
        self.sequence
    }

    pub fn hide(&mut self) {
        self.open = false;
    }

    /// Closes the banner only if it is still showing the message numbered `sequence`.
    pub fn expire(&mut self, sequence: u64) {
        if self.sequence == sequence {
            self.hide();
        }
    }
}

#[derive(Clone, Copy)]
pub struct NotificationContext {
    inner: Signal<Notification>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(Notification::default()),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = Notification> + '_ {
        self.inner.read()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        let sequence = self.inner.write().show(message, severity);
        self.schedule_hide(sequence);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }

    pub fn hide(&mut self) {
        self.inner.write().hide();
    }

    #[cfg(feature = "web")]
    fn schedule_hide(&self, sequence: u64) {
        let mut inner = self.inner;
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_HIDE_MS).await;
            inner.write().expire(sequence);
        });
    }

    #[cfg(not(feature = "web"))]
    fn schedule_hide(&self, _sequence: u64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_opens_with_message() {
        let mut notification = Notification::default();

        notification.show("Club created", Severity::Success);

        assert!(notification.open);
        assert_eq!(notification.message, "Club created");
        assert_eq!(notification.severity.alert_class(), "alert-success");
    }

    #[test]
    fn stale_expiry_keeps_newer_message_open() {
        let mut notification = Notification::default();
        let first = notification.show("Saved", Severity::Success);
        notification.show("Failed to fetch events", Severity::Error);

        notification.expire(first);
        assert!(notification.open);

        notification.expire(notification.sequence);
        assert!(!notification.open);
    }
}
