//! Transactional e-mail
//!
//! Thin client over a Resend-style HTTP API. Mail is best effort: the
//! booking flow never fails because a notification could not be sent,
//! failures are only logged.

pub mod templates;

use serde::Serialize;
use tracing::{debug, warn};

use crate::db::models::Reservation;
use shared::models::ReservationStatus;

/// Mailer configuration, loaded from the environment
///
/// With no `MAIL_API_KEY` the mailer is disabled and every send is a
/// logged no-op, which keeps local development key-free.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub from: String,
    /// Receives a copy of every booking notification
    pub admin_email: Option<String>,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com/emails".into()),
            api_key: std::env::var("MAIL_API_KEY").ok().filter(|k| !k.is_empty()),
            from: std::env::var("MAIL_FROM").unwrap_or_else(|_| "bookings@localhost".into()),
            admin_email: std::env::var("ADMIN_EMAIL").ok().filter(|e| !e.is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

pub struct Mailer {
    config: MailConfig,
    client: reqwest::Client,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Send one message; errors are logged, never propagated
    async fn send(&self, to: &str, subject: &str, html: &str) {
        let Some(api_key) = &self.config.api_key else {
            debug!(to, subject, "Mailer disabled, skipping notification");
            return;
        };

        let body = SendRequest {
            from: &self.config.from,
            to: vec![to],
            subject,
            html,
        };

        let result = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                debug!(to, subject, "Notification sent");
            }
            Ok(resp) => {
                warn!(to, subject, status = %resp.status(), "Mail API rejected notification");
            }
            Err(err) => {
                warn!(to, subject, error = %err, "Failed to reach mail API");
            }
        }
    }

    /// Confirmation to the customer plus a copy to the back office
    pub async fn notify_reservation_created(&self, reservation: &Reservation) {
        let subject = templates::created_subject(reservation);
        let html = templates::created_body(reservation);
        self.send(&reservation.customer.email, &subject, &html).await;

        if let Some(admin) = &self.config.admin_email {
            self.send(admin, &subject, &html).await;
        }
    }

    /// Status-change notice to the customer
    pub async fn notify_status_changed(&self, reservation: &Reservation, old: ReservationStatus) {
        let subject = templates::status_subject(reservation);
        let html = templates::status_body(reservation, old);
        self.send(&reservation.customer.email, &subject, &html).await;
    }
}
