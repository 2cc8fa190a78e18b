//! Transactional email delivery.
//!
//! Emails are glue around other operations, never the operation itself: a
//! failed send is logged and swallowed so a flaky email provider cannot fail
//! a webhook or a badge award.

use serde::Serialize;

use crate::server::config::Config;

/// The transactional templates the platform sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    Welcome,
    PaymentFailed,
    BadgeAwarded,
}

impl EmailTemplate {
    fn subject(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome to Top Tier Men, {{name}}",
            Self::PaymentFailed => "Your payment failed",
            Self::BadgeAwarded => "You earned the {{badge}} badge",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Self::Welcome => {
                "Hi {{name}},\n\nYour membership is active. Head to the academy \
                 and start your first module.\n\nTop Tier Men"
            }
            Self::PaymentFailed => {
                "Hi {{name}},\n\nWe could not collect your latest payment. Please \
                 update your payment details to keep your membership active.\n\n\
                 Top Tier Men"
            }
            Self::BadgeAwarded => {
                "Hi {{name}},\n\nYou just earned the {{badge}} badge. Keep going.\n\n\
                 Top Tier Men"
            }
        }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    body: String,
}

pub struct EmailService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> EmailService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self { http_client, config }
    }

    /// Renders and sends a template, substituting `{{key}}` placeholders from
    /// `vars`. Never returns an error: delivery problems are logged only.
    pub async fn send(&self, to: &str, template: EmailTemplate, vars: &[(&str, &str)]) {
        let request = SendEmailRequest {
            from: &self.config.email_from,
            to,
            subject: render(template.subject(), vars),
            body: render(template.body(), vars),
        };

        let result = self
            .http_client
            .post(&self.config.email_api_url)
            .bearer_auth(&self.config.email_api_key)
            .json(&request)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!(to, template = ?template, "email sent");
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(to, template = ?template, %status, body, "email provider rejected send");
            }
            Err(err) => {
                tracing::warn!(to, template = ?template, error = %err, "email send failed");
            }
        }
    }
}

/// Replaces every `{{key}}` placeholder with its value. Unknown placeholders
/// are left in place so a missing variable is visible in the delivered mail
/// rather than silently blanked.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}
