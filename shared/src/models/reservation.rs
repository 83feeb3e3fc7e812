//! Reservation wire types
//!
//! The checkout request, the frozen line-item snapshot, and the
//! reservation status machine. Item snapshots are copies of the
//! product's terms at booking time; later product edits never reach
//! an existing reservation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Customer contact details captured at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One cart line as sent by the storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemRequest {
    /// Product reference (String ID)
    pub product: String,
    pub quantity: u32,
    /// Hours requested beyond the included base duration
    pub extra_hours: u32,
}

/// Checkout payload. Totals are always recomputed server-side;
/// any client-sent amounts are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub customer: CustomerInfo,
    /// `YYYY-MM-DD`, must match a published slot
    pub event_date: String,
    /// `HH:MM`, must match a published slot
    pub event_hour: String,
    pub event_address: String,
    /// Zone reference (String ID) for the transport fee
    pub zone: String,
    pub adults_count: u32,
    pub children_count: u32,
    pub items: Vec<CartItemRequest>,
    pub notes: Option<String>,
}

/// Frozen snapshot of a product's terms at booking time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationItem {
    pub product_id: String,
    pub product_name: String,
    /// Unit base price at booking time
    pub unit_price: f64,
    pub extra_hour_percentage: f64,
    pub quantity: u32,
    pub extra_hours: u32,
    /// quantity * unit_price * (1 + extra_hour_percentage/100 * extra_hours)
    pub item_total: f64,
}

/// Reservation lifecycle
///
/// `PendingPayment → Confirmed → Completed`, with `Cancelled` reachable
/// from any non-terminal state. `Confirmed` is the paid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    PendingPayment,
    Confirmed,
    Completed,
    Cancelled,
}

/// Rejected admin status change
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid status transition: {from} -> {to}")]
pub struct InvalidTransition {
    pub from: &'static str,
    pub to: &'static str,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPayment => "pending_payment",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether an administrator may move a reservation from `self` to `to`
    pub fn can_transition_to(&self, to: ReservationStatus) -> bool {
        matches!(
            (self, to),
            (Self::PendingPayment, Self::Confirmed)
                | (Self::PendingPayment, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
                | (Self::Confirmed, Self::Cancelled)
        )
    }

    /// Validate a transition, returning the offending pair on failure
    pub fn transition_to(&self, to: ReservationStatus) -> Result<ReservationStatus, InvalidTransition> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(InvalidTransition {
                from: self.as_str(),
                to: to.as_str(),
            })
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Admin status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_confirm_or_cancel() {
        let s = ReservationStatus::PendingPayment;
        assert!(s.can_transition_to(ReservationStatus::Confirmed));
        assert!(s.can_transition_to(ReservationStatus::Cancelled));
        assert!(!s.can_transition_to(ReservationStatus::Completed));
    }

    #[test]
    fn confirmed_can_complete_or_cancel() {
        let s = ReservationStatus::Confirmed;
        assert!(s.can_transition_to(ReservationStatus::Completed));
        assert!(s.can_transition_to(ReservationStatus::Cancelled));
        assert!(!s.can_transition_to(ReservationStatus::PendingPayment));
    }

    #[test]
    fn terminal_states_are_frozen() {
        for s in [ReservationStatus::Completed, ReservationStatus::Cancelled] {
            assert!(s.is_terminal());
            for to in [
                ReservationStatus::PendingPayment,
                ReservationStatus::Confirmed,
                ReservationStatus::Completed,
                ReservationStatus::Cancelled,
            ] {
                assert!(!s.can_transition_to(to));
            }
        }
    }

    #[test]
    fn transition_error_names_both_states() {
        let err = ReservationStatus::Completed
            .transition_to(ReservationStatus::Confirmed)
            .unwrap_err();
        assert_eq!(err.from, "completed");
        assert_eq!(err.to, "confirmed");
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ReservationStatus::PendingPayment).unwrap();
        assert_eq!(json, "\"pending_payment\"");
        let back: ReservationStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, ReservationStatus::Cancelled);
    }
}
