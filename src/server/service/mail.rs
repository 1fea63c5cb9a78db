//! Transactional email delivery.
//!
//! Messages are posted as JSON to an HTTP email provider. Delivery is always
//! best-effort: a failed or rejected send is logged and reported to the caller,
//! but no appointment mutation ever fails because an email did not go out.
//! When the provider is not configured the mailer drops every message.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::server::util::{money::format_brl, time::format_datetime_local};

/// Configured email provider endpoint and sender identity.
#[derive(Clone)]
struct MailProvider {
    api_url: String,
    api_key: String,
    from: String,
}

/// Transactional email sender.
///
/// Wraps the shared HTTP client and the provider configuration. Cloning is
/// cheap; the underlying `reqwest::Client` is reference-counted.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    app_url: String,
    provider: Option<MailProvider>,
}

impl Mailer {
    /// Creates a mailer from the optional provider settings.
    ///
    /// All three provider settings must be present for the mailer to send
    /// anything; otherwise it runs disabled and drops messages.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `app_url` - Public address of the application, linked in email footers
    /// - `api_url` - Base URL of the email provider API
    /// - `api_key` - Bearer token for the provider
    /// - `from` - Sender address for outgoing mail
    pub fn new(
        client: reqwest::Client,
        app_url: String,
        api_url: Option<String>,
        api_key: Option<String>,
        from: Option<String>,
    ) -> Self {
        let provider = match (api_url, api_key, from) {
            (Some(api_url), Some(api_key), Some(from)) => Some(MailProvider {
                api_url,
                api_key,
                from,
            }),
            _ => {
                tracing::warn!(
                    "Email provider not fully configured, transactional email is disabled"
                );
                None
            }
        };

        Self {
            client,
            app_url,
            provider,
        }
    }

    /// Whether a provider is configured and sends will be attempted.
    pub fn enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Sends the booking confirmation for a new appointment.
    ///
    /// # Returns
    /// - `true` - The provider accepted the message
    /// - `false` - Sending failed or the mailer is disabled
    pub async fn send_appointment_confirmation(
        &self,
        to: &str,
        patient_name: &str,
        doctor_name: &str,
        date: DateTime<Utc>,
        price_cents: i32,
    ) -> bool {
        let (subject, html) =
            confirmation_message(patient_name, doctor_name, date, price_cents, &self.app_url);

        self.send(to, &subject, html).await
    }

    /// Sends the notice that an appointment was moved to a new slot.
    ///
    /// # Returns
    /// - `true` - The provider accepted the message
    /// - `false` - Sending failed or the mailer is disabled
    pub async fn send_appointment_rescheduled(
        &self,
        to: &str,
        patient_name: &str,
        doctor_name: &str,
        date: DateTime<Utc>,
    ) -> bool {
        let (subject, html) = rescheduled_message(patient_name, doctor_name, date, &self.app_url);

        self.send(to, &subject, html).await
    }

    /// Sends the notice that an appointment was cancelled.
    ///
    /// # Returns
    /// - `true` - The provider accepted the message
    /// - `false` - Sending failed or the mailer is disabled
    pub async fn send_appointment_cancelled(
        &self,
        to: &str,
        patient_name: &str,
        doctor_name: &str,
        date: DateTime<Utc>,
    ) -> bool {
        let (subject, html) = cancelled_message(patient_name, doctor_name, date, &self.app_url);

        self.send(to, &subject, html).await
    }

    /// Sends the day-before reminder for an upcoming appointment.
    ///
    /// # Returns
    /// - `true` - The provider accepted the message
    /// - `false` - Sending failed or the mailer is disabled
    pub async fn send_appointment_reminder(
        &self,
        to: &str,
        patient_name: &str,
        doctor_name: &str,
        date: DateTime<Utc>,
    ) -> bool {
        let (subject, html) = reminder_message(patient_name, doctor_name, date, &self.app_url);

        self.send(to, &subject, html).await
    }

    /// Posts one message to the provider.
    ///
    /// # Returns
    /// - `true` - The provider accepted the message
    /// - `false` - The request failed, the provider rejected it, or the
    ///   mailer is disabled
    async fn send(&self, to: &str, subject: &str, html: String) -> bool {
        let Some(provider) = &self.provider else {
            tracing::debug!("Email disabled, dropping \"{}\" to {}", subject, to);
            return false;
        };

        let body = serde_json::json!({
            "from": provider.from,
            "to": to,
            "subject": subject,
            "html": html,
        });

        let result = self
            .client
            .post(format!("{}/emails", provider.api_url))
            .header("Authorization", format!("Bearer {}", provider.api_key))
            .json(&body)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Sent \"{}\" to {}", subject, to);
                true
            }
            Ok(response) => {
                tracing::error!(
                    "Email provider rejected \"{}\" to {}: {}",
                    subject,
                    to,
                    response.status()
                );
                false
            }
            Err(err) => {
                tracing::error!("Failed to send \"{}\" to {}: {}", subject, to, err);
                false
            }
        }
    }
}

fn confirmation_message(
    patient_name: &str,
    doctor_name: &str,
    date: DateTime<Utc>,
    price_cents: i32,
    app_url: &str,
) -> (String, String) {
    let subject = "Your appointment is confirmed".to_string();
    let html = format!(
        "<p>Hello {patient_name},</p>\
         <p>Your appointment with {doctor_name} is confirmed for \
         <strong>{}</strong>.</p>\
         <p>Price: {}</p>\
         {}",
        format_datetime_local(date),
        format_brl(price_cents as i64),
        footer(app_url),
    );

    (subject, html)
}

fn rescheduled_message(
    patient_name: &str,
    doctor_name: &str,
    date: DateTime<Utc>,
    app_url: &str,
) -> (String, String) {
    let subject = "Your appointment was rescheduled".to_string();
    let html = format!(
        "<p>Hello {patient_name},</p>\
         <p>Your appointment with {doctor_name} was moved to \
         <strong>{}</strong>.</p>\
         {}",
        format_datetime_local(date),
        footer(app_url),
    );

    (subject, html)
}

fn cancelled_message(
    patient_name: &str,
    doctor_name: &str,
    date: DateTime<Utc>,
    app_url: &str,
) -> (String, String) {
    let subject = "Your appointment was cancelled".to_string();
    let html = format!(
        "<p>Hello {patient_name},</p>\
         <p>Your appointment with {doctor_name} on {} was cancelled.</p>\
         <p>Contact the clinic to book a new time.</p>\
         {}",
        format_datetime_local(date),
        footer(app_url),
    );

    (subject, html)
}

fn reminder_message(
    patient_name: &str,
    doctor_name: &str,
    date: DateTime<Utc>,
    app_url: &str,
) -> (String, String) {
    let subject = "Appointment reminder".to_string();
    let html = format!(
        "<p>Hello {patient_name},</p>\
         <p>This is a reminder of your appointment with {doctor_name} on \
         <strong>{}</strong>.</p>\
         {}",
        format_datetime_local(date),
        footer(app_url),
    );

    (subject, html)
}

fn footer(app_url: &str) -> String {
    format!("<p>Sent by <a href=\"{app_url}\">{app_url}</a></p>")
}
