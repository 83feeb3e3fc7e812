//! Notification templates
//!
//! Plain inline HTML, no templating engine. Customer-facing copy keeps
//! to the frozen reservation snapshot.

use crate::db::models::Reservation;
use shared::models::ReservationStatus;

/// Minimal HTML escape for user-supplied text
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn status_label(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::PendingPayment => "pending payment",
        ReservationStatus::Confirmed => "confirmed",
        ReservationStatus::Completed => "completed",
        ReservationStatus::Cancelled => "cancelled",
    }
}

fn reservation_ref(reservation: &Reservation) -> String {
    reservation
        .id
        .as_ref()
        .map(|t| t.id.to_raw())
        .unwrap_or_else(|| "pending".to_string())
}

pub fn created_subject(reservation: &Reservation) -> String {
    format!(
        "Booking received for {} at {}",
        reservation.event_date, reservation.event_hour
    )
}

pub fn created_body(reservation: &Reservation) -> String {
    let mut lines = String::new();
    for item in &reservation.items {
        lines.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
            escape_html(&item.product_name),
            item.quantity,
            item.item_total
        ));
    }

    format!(
        "<h2>Thank you, {}!</h2>\
         <p>We received your booking <b>{}</b> for {} at {}.</p>\
         <table><tr><th>Item</th><th>Qty</th><th>Total</th></tr>{}</table>\
         <p>Transport: {:.2}<br>Total: <b>{:.2}</b></p>\
         <p>We will confirm once payment is received.</p>",
        escape_html(&reservation.customer.name),
        reservation_ref(reservation),
        reservation.event_date,
        reservation.event_hour,
        lines,
        reservation.transport_cost,
        reservation.total,
    )
}

pub fn status_subject(reservation: &Reservation) -> String {
    format!(
        "Your booking for {} is now {}",
        reservation.event_date,
        status_label(reservation.status)
    )
}

pub fn status_body(reservation: &Reservation, old: ReservationStatus) -> String {
    format!(
        "<h2>Hello, {}</h2>\
         <p>Your booking <b>{}</b> for {} at {} changed from <b>{}</b> to <b>{}</b>.</p>\
         <p>Total: <b>{:.2}</b></p>",
        escape_html(&reservation.customer.name),
        reservation_ref(reservation),
        reservation.event_date,
        reservation.event_hour,
        status_label(old),
        status_label(reservation.status),
        reservation.total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CustomerInfo, ReservationItem};

    fn sample_reservation() -> Reservation {
        Reservation {
            id: None,
            customer: CustomerInfo {
                name: "Maria".to_string(),
                email: "maria@example.com".to_string(),
                phone: "+34 600 000 000".to_string(),
            },
            event_date: "2026-09-05".to_string(),
            event_hour: "16:00".to_string(),
            event_address: "Calle Mayor 1".to_string(),
            zone: None,
            zone_name: "Centro".to_string(),
            adults_count: 10,
            children_count: 12,
            items: vec![ReservationItem {
                product_id: "product:castle".to_string(),
                product_name: "Bouncy Castle".to_string(),
                unit_price: 150.0,
                extra_hour_percentage: 15.0,
                quantity: 2,
                extra_hours: 1,
                item_total: 345.0,
            }],
            subtotal: 345.0,
            transport_cost: 25.0,
            total: 370.0,
            status: ReservationStatus::PendingPayment,
            notes: None,
            created_at: 0,
        }
    }

    #[test]
    fn created_mail_carries_totals_and_items() {
        let reservation = sample_reservation();
        let body = created_body(&reservation);
        assert!(body.contains("Bouncy Castle"));
        assert!(body.contains("370.00"));
        assert!(created_subject(&reservation).contains("2026-09-05"));
    }

    #[test]
    fn customer_name_markup_is_escaped() {
        let mut reservation = sample_reservation();
        reservation.customer.name = "<script>alert(1)</script> & Co".to_string();
        let body = created_body(&reservation);
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; Co"));
        let status = status_body(&reservation, ReservationStatus::PendingPayment);
        assert!(!status.contains("<script>"));
    }

    #[test]
    fn status_mail_names_both_states() {
        let mut reservation = sample_reservation();
        reservation.status = ReservationStatus::Confirmed;
        let body = status_body(&reservation, ReservationStatus::PendingPayment);
        assert!(body.contains("pending payment"));
        assert!(body.contains("confirmed"));
    }
}
