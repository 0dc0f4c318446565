use std::fmt;

use serde::{Deserialize, Serialize};

/// Activation status of enterprises, subsidiaries and employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Enabled,
    Disabled,
}

impl Status {
    /// Wire value, also used as filter value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Actif",
            Self::Disabled => "Inactif",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl TransportStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Accepted,
        Self::Rejected,
        Self::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Accepted => "Acceptée",
            Self::Rejected => "Refusée",
            Self::Completed => "Terminée",
        }
    }

    /// Only pending requests can still be accepted or rejected.
    pub fn is_open(self) -> bool {
        self == Self::Pending
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
