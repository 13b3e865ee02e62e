//! Email service for claim notifications.
//!
//! Uses SMTP via lettre for delivery with Askama HTML templates. Delivery is
//! best-effort: the claim is already committed when a notification goes out,
//! so callers log failures instead of surfacing them to the guest.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::EmailConfig;

/// HTML template for the claim notification sent to the couple.
#[derive(Template)]
#[template(path = "email/gift_claimed.html")]
struct GiftClaimedEmailHtml<'a> {
    gift_name: &'a str,
    guest_name: &'a str,
    anonymous: bool,
}

/// Plain text template for the claim notification.
#[derive(Template)]
#[template(path = "email/gift_claimed.txt")]
struct GiftClaimedEmailText<'a> {
    gift_name: &'a str,
    guest_name: &'a str,
    anonymous: bool,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    notify_address: String,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be configured.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            notify_address: config.notify_address.clone(),
        })
    }

    /// Notify the couple that a gift has been claimed.
    ///
    /// The guest's real name is always included here even for anonymous
    /// claims; anonymity only hides the name on the public page.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to send or a template fails to
    /// render.
    pub async fn send_claim_notification(
        &self,
        gift_name: &str,
        guest_name: &str,
        anonymous: bool,
    ) -> Result<(), EmailError> {
        let html = GiftClaimedEmailHtml {
            gift_name,
            guest_name,
            anonymous,
        }
        .render()?;
        let text = GiftClaimedEmailText {
            gift_name,
            guest_name,
            anonymous,
        }
        .render()?;

        let subject = format!("Presente marcado: {gift_name}");
        self.send_multipart_email(&self.notify_address, &subject, &text, &html)
            .await
    }

    /// Send a multipart email with both plain text and HTML versions.
    async fn send_multipart_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        self.mailer.send(email).await?;

        tracing::info!(to = %to, subject = %subject, "Email sent successfully");
        Ok(())
    }
}
