//! Transient toast notifications.

use super::error::DashboardError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// How long a toast stays up. Errors and warnings get twice the base TTL.
    pub fn lifetime_ms(&self, base_ttl_ms: u32) -> u32 {
        match self {
            Self::Error | Self::Warning => base_ttl_ms.saturating_mul(2),
            Self::Success | Self::Info => base_ttl_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn css_class(&self) -> String {
        format!("toast toast--{}", self.level.code())
    }
}

impl From<&DashboardError> for Notification {
    fn from(err: &DashboardError) -> Self {
        Self::error(err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_have_distinct_ids() {
        let a = Notification::success("Product added");
        let b = Notification::success("Product added");
        assert_ne!(a.id, b.id);
        assert_eq!(a.css_class(), "toast toast--success");
    }

    #[test]
    fn test_from_error() {
        let toast = Notification::from(&DashboardError::network("brands", "offline"));
        assert_eq!(toast.level, NotificationLevel::Error);
        assert_eq!(toast.level.lifetime_ms(4000), 8000);
        assert_eq!(NotificationLevel::Success.lifetime_ms(4000), 4000);
        assert!(toast.message.contains("brands"));
    }
}
