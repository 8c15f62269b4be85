//! Lifecycle status for investment vehicles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an investment vehicle.
///
/// Status drives how metrics treat residual value: a closed vehicle
/// carries no net asset value, so its residual ratios collapse to zero
/// and its realized multiples tell the whole story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    /// Still holding positions; residual value counts toward multiples.
    #[default]
    Active,
    /// Fully realized and wound down; residual value is zero.
    Closed,
}

impl VehicleStatus {
    /// Returns true if the vehicle is still active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, VehicleStatus::Active)
    }

    /// Returns true if the vehicle has been wound down.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, VehicleStatus::Closed)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Closed => "Closed",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(VehicleStatus::Active.is_active());
        assert!(!VehicleStatus::Active.is_closed());
        assert!(VehicleStatus::Closed.is_closed());
        assert!(!VehicleStatus::Closed.is_active());
    }

    #[test]
    fn test_default() {
        assert_eq!(VehicleStatus::default(), VehicleStatus::Active);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&VehicleStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let parsed: VehicleStatus = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(parsed, VehicleStatus::Closed);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VehicleStatus::Active), "Active");
        assert_eq!(format!("{}", VehicleStatus::Closed), "Closed");
    }
}
