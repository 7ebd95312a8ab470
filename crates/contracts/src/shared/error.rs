use super::validation::ValidationErrors;
use thiserror::Error;

/// Every failure the dashboard can surface. None of them is fatal: callers
/// degrade to an empty/default state and show a notification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("failed to reach server while loading {resource}: {message}")]
    Network { resource: String, message: String },

    #[error("server responded with status {status} for {resource}")]
    Http { resource: String, status: u16 },

    #[error("unexpected response for {resource}: {message}")]
    Decode { resource: String, message: String },

    /// The API answered with `success: false`.
    #[error("{resource} request rejected: {message}")]
    Rejected { resource: String, message: String },

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("not authenticated")]
    Unauthorized,

    #[error("permission denied")]
    Forbidden,
}

impl DashboardError {
    pub fn network(resource: &str, err: impl std::fmt::Display) -> Self {
        Self::Network {
            resource: resource.to_string(),
            message: err.to_string(),
        }
    }

    pub fn decode(resource: &str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            resource: resource.to_string(),
            message: err.to_string(),
        }
    }

    pub fn from_status(resource: &str, status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            _ => Self::Http {
                resource: resource.to_string(),
                status,
            },
        }
    }

    /// Failures of the remote fetch boundary, as opposed to local validation.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Http { .. } | Self::Decode { .. } | Self::Rejected { .. }
        )
    }

    /// Short text for a toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { resource, .. } => {
                format!("Failed to load {resource}. Please check your connection.")
            }
            Self::Http { status, .. } if *status >= 500 => {
                "Server error. Please try again later.".to_string()
            }
            Self::Http { resource, status: 404 } => format!("{resource} not found."),
            Self::Http { status: 409, .. } => "A record with these details already exists.".to_string(),
            Self::Http { resource, .. } | Self::Decode { resource, .. } => {
                format!("Failed to load {resource}.")
            }
            Self::Rejected { message, .. } => message.clone(),
            Self::Validation(_) => "Please fix the highlighted fields.".to_string(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::Forbidden => "You do not have permission to perform this action.".to_string(),
        }
    }
}

impl From<ValidationErrors> for DashboardError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(DashboardError::from_status("brands", 401), DashboardError::Unauthorized);
        assert_eq!(DashboardError::from_status("brands", 403), DashboardError::Forbidden);
        assert!(DashboardError::from_status("brands", 502).is_fetch_failure());
    }

    #[test]
    fn test_user_messages() {
        let err = DashboardError::from_status("models", 500);
        assert_eq!(err.user_message(), "Server error. Please try again later.");

        let err = DashboardError::from_status("Product", 404);
        assert_eq!(err.user_message(), "Product not found.");

        let err = DashboardError::network("brands", "timeout");
        assert_eq!(
            err.user_message(),
            "Failed to load brands. Please check your connection."
        );
        assert!(!DashboardError::Validation(ValidationErrors::new()).is_fetch_failure());
    }
}
