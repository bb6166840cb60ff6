//! Outbound mail relay
//!
//! [`SmtpRelay`] opens a fresh STARTTLS session per send. No pool is
//! configured, so the session is closed when the send future finishes,
//! whether it succeeded or not.

use super::message::SUBJECT;
use crate::{config::RelayConfig, error::DeliveryError};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{info, warn};

/// Something that can deliver one plain-text message.
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Sends `body` to `destination` exactly once.
    async fn send(&self, body: &str, destination: &str) -> Result<(), DeliveryError>;
}

/// Builds the plain-text mail sent to the gateway address.
pub fn build_message(
    sender: &str,
    destination: &str,
    body: &str,
) -> Result<Message, DeliveryError> {
    let from: Mailbox = sender.parse()?;
    let to: Mailbox = destination.parse()?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())?;
    Ok(message)
}

/// SMTP relay configured from [`RelayConfig`]
pub struct SmtpRelay {
    config: RelayConfig,
}

impl SmtpRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, DeliveryError> {
        let credentials = Credentials::new(
            self.config.sender_address.clone(),
            self.config.sender_credential.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(credentials)
            .timeout(Some(self.config.timeout))
            .build();
        Ok(transport)
    }
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn send(&self, body: &str, destination: &str) -> Result<(), DeliveryError> {
        let message = build_message(&self.config.sender_address, destination, body)?;
        let transport = self.transport()?;

        match transport.send(message).await {
            Ok(response) => {
                info!(
                    relay = %self.config.host,
                    destination,
                    code = %response.code(),
                    "grocery list sent"
                );
                Ok(())
            }
            Err(e) => {
                warn!(relay = %self.config.host, destination, error = %e, "delivery failed");
                Err(e.into())
            }
        }
    }
}
