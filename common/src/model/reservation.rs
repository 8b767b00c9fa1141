use serde::{Deserialize, Serialize};

use super::user::UserId;
use super::DisplayCategory;
use crate::datetime::{BackendInterval, Timestamp};
use crate::store::Resource;

pub type ReservationId = u64;

/// Lifecycle state of a booking.
///
/// The backend spells the cancelled state `canceled`; `cancelled` is
/// accepted on input as well. Values this client does not know about
/// deserialise to `Unknown` rather than failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    #[serde(rename = "canceled", alias = "cancelled")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ReservationStatus {
    /// Statuses offered by the list filter, in display order.
    pub const FILTERABLE: [ReservationStatus; 4] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Completed,
        ReservationStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Unknown => "Unknown",
        }
    }

    /// Wire name, as used in query values and select options.
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "canceled",
            ReservationStatus::Unknown => "unknown",
        }
    }

    pub fn from_wire(value: &str) -> Self {
        serde_json::from_value(serde_json::Value::String(value.to_string()))
            .unwrap_or(ReservationStatus::Unknown)
    }

    pub fn category(self) -> DisplayCategory {
        match self {
            ReservationStatus::Pending => DisplayCategory::Warning,
            ReservationStatus::Confirmed => DisplayCategory::Info,
            ReservationStatus::Completed => DisplayCategory::Success,
            ReservationStatus::Cancelled => DisplayCategory::Danger,
            ReservationStatus::Unknown => DisplayCategory::Neutral,
        }
    }

    /// Status changes an admin may apply from this state.
    pub fn transitions(self) -> &'static [ReservationStatus] {
        match self {
            ReservationStatus::Pending => {
                &[ReservationStatus::Confirmed, ReservationStatus::Cancelled]
            }
            ReservationStatus::Confirmed => {
                &[ReservationStatus::Completed, ReservationStatus::Cancelled]
            }
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub customer: Option<UserId>,
    /// Full name or username, filled in by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub created_at: Timestamp,
}

impl Resource for Reservation {
    type Id = ReservationId;

    const PATH: &'static str = "reservations/";
    const LABEL: &'static str = "reservation";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    /// The slot must end after it starts.
    fn is_well_formed(&self) -> bool {
        self.end_time > self.start_time
    }
}

/// Body of `POST reservations/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReservation {
    pub start_time: String,
    pub end_time: String,
    pub status: ReservationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewReservation {
    /// A pending booking for `slot`. Blank notes are not sent.
    pub fn pending(slot: BackendInterval, notes: &str) -> Self {
        let notes = notes.trim();
        Self {
            start_time: slot.start,
            end_time: slot.end,
            status: ReservationStatus::Pending,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

/// Body of `PATCH reservations/{id}/`; only `Some` fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReservationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReservationPatch {
    pub fn status(status: ReservationStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}
