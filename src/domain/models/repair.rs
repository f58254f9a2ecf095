//! Repair job domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::new_record_id;

/// Repair job status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepairStatus {
    Pending,
    InProgress,
    Completed,
    Delivered,
    Cancelled,
}

impl RepairStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether `next` follows the intended workflow:
    /// pending -> in-progress -> completed -> delivered, with cancellation
    /// reachable from pending or in-progress.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::InProgress)
                | (Self::InProgress, Self::Completed)
                | (Self::Completed, Self::Delivered)
                | (Self::Pending, Self::Cancelled)
                | (Self::InProgress, Self::Cancelled)
        )
    }
}

impl std::fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Repair job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairJob {
    pub id: String,
    pub customer_id: String,
    pub device_id: String,
    pub description: String,
    pub status: RepairStatus,
    pub estimated_cost: Decimal,
    pub actual_cost: Option<Decimal>,
    pub technician_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl RepairJob {
    pub fn new(input: NewRepairJob) -> Self {
        let now = Utc::now();
        Self {
            id: new_record_id(),
            customer_id: input.customer_id,
            device_id: input.device_id,
            description: input.description,
            status: RepairStatus::Pending,
            estimated_cost: input.estimated_cost,
            actual_cost: None,
            technician_notes: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Shallow merge: provided fields overwrite, omitted fields are retained.
    /// The caller restamps `updated_at`.
    pub fn apply(&mut self, patch: RepairJobUpdate) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(estimated_cost) = patch.estimated_cost {
            self.estimated_cost = estimated_cost;
        }
        if let Some(actual_cost) = patch.actual_cost {
            self.actual_cost = Some(actual_cost);
        }
        if let Some(technician_notes) = patch.technician_notes {
            self.technician_notes = Some(technician_notes);
        }
    }
}

/// Payload for opening a repair job
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRepairJob {
    #[validate(length(min = 1, message = "customer_id must not be empty"))]
    pub customer_id: String,
    #[validate(length(min = 1, message = "device_id must not be empty"))]
    pub device_id: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub estimated_cost: Decimal,
}

/// Partial update for a repair job
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepairJobUpdate {
    pub description: Option<String>,
    pub status: Option<RepairStatus>,
    pub estimated_cost: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    pub technician_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for s in [
            RepairStatus::Pending,
            RepairStatus::InProgress,
            RepairStatus::Completed,
            RepairStatus::Delivered,
            RepairStatus::Cancelled,
        ] {
            assert_eq!(RepairStatus::from_str(s.as_str()), Some(s));
        }
        assert_eq!(RepairStatus::from_str("shipped"), None);
    }

    #[test]
    fn test_intended_transitions() {
        assert!(RepairStatus::Pending.can_transition_to(RepairStatus::InProgress));
        assert!(RepairStatus::InProgress.can_transition_to(RepairStatus::Completed));
        assert!(RepairStatus::Completed.can_transition_to(RepairStatus::Delivered));
        assert!(RepairStatus::Pending.can_transition_to(RepairStatus::Cancelled));
        assert!(RepairStatus::InProgress.can_transition_to(RepairStatus::Cancelled));

        assert!(!RepairStatus::Pending.can_transition_to(RepairStatus::Completed));
        assert!(!RepairStatus::Completed.can_transition_to(RepairStatus::Cancelled));
        assert!(!RepairStatus::Delivered.can_transition_to(RepairStatus::Pending));
        assert!(!RepairStatus::Cancelled.can_transition_to(RepairStatus::InProgress));
    }
}
