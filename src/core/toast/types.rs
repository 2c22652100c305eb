//! core/toast/types.rs
//! Toast data: id, kind, and the toast itself.
//! Plain data, no timers and no GUI code.

use std::fmt;
use std::time::Duration;

use uuid::Uuid;

use crate::config::{ACHIEVEMENT_TOAST_DURATION_MS, DEFAULT_TOAST_DURATION_MS};

/// Opaque unique toast identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Severity tag. Drives default duration, icon and accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
    Achievement,
}

impl ToastKind {
    pub const ALL: [ToastKind; 5] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Warning,
        ToastKind::Info,
        ToastKind::Achievement,
    ];

    pub fn default_duration(self) -> Duration {
        match self {
            ToastKind::Achievement => Duration::from_millis(ACHIEVEMENT_TOAST_DURATION_MS),
            _ => Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }

    pub fn default_icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✖",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
            ToastKind::Achievement => "🏆",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
            ToastKind::Achievement => "achievement",
        }
    }
}

/// One notification.
///
/// `duration == Duration::ZERO` means "stay until dismissed".
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    title: String,
    message: Option<String>,
    duration: Duration,
    icon: Option<String>,
}

impl Toast {
    /// New toast with a fresh id and the kind's default duration.
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            title: title.into(),
            message: None,
            duration: kind.default_duration(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Keep on screen until the user closes it.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.with_duration(Duration::ZERO)
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Custom icon if set, else the kind's glyph.
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(self.kind.default_icon())
    }

    pub fn auto_expires(&self) -> bool {
        !self.duration.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = Toast::new(ToastKind::Info, "a");
        let b = Toast::new(ToastKind::Info, "a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn achievement_lasts_longer_than_other_kinds() {
        for kind in ToastKind::ALL {
            let expected = if kind == ToastKind::Achievement { 8000 } else { 5000 };
            assert_eq!(kind.default_duration(), Duration::from_millis(expected));
        }
    }

    #[test]
    fn persistent_toast_does_not_auto_expire() {
        let toast = Toast::new(ToastKind::Error, "stuck").persistent();
        assert!(!toast.auto_expires());
        assert!(Toast::new(ToastKind::Error, "x").auto_expires());
    }

    #[test]
    fn custom_icon_overrides_kind_glyph() {
        let plain = Toast::new(ToastKind::Success, "ok");
        assert_eq!(plain.icon(), "✔");

        let starred = plain.with_icon("⭐");
        assert_eq!(starred.icon(), "⭐");
    }

    #[test]
    fn builder_sets_message() {
        let toast = Toast::new(ToastKind::Warning, "Careful").with_message("Low battery");
        assert_eq!(toast.title(), "Careful");
        assert_eq!(toast.message(), Some("Low battery"));
        assert_eq!(toast.kind(), ToastKind::Warning);
    }
}
