//! Transient notices shown in a strip at the bottom of the window.

use chrono::{DateTime, Duration, Utc};
use egui::{Color32, RichText, Ui};

/// How long a notice stays visible.
pub const NOTICE_LIFETIME_SECS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

/// Queue of notices. Time is passed in so tests control expiry.
#[derive(Debug, Default)]
pub struct Notifications {
    notices: Vec<Notice>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>, now: DateTime<Utc>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
            expires_at: now + Duration::seconds(NOTICE_LIFETIME_SECS),
        });
    }

    pub fn info(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.push(NoticeLevel::Info, message, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.push(NoticeLevel::Error, message, now);
    }

    /// Drops every notice whose expiry is not after `now`.
    pub fn retain_active(&mut self, now: DateTime<Utc>) {
        self.notices.retain(|notice| notice.expires_at > now);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn show(&self, ui: &mut Ui) {
        for notice in &self.notices {
            let color = match notice.level {
                NoticeLevel::Info => Color32::from_rgb(34, 139, 34),
                NoticeLevel::Error => Color32::RED,
            };
            ui.label(RichText::new(&notice.message).color(color));
        }
    }
}
