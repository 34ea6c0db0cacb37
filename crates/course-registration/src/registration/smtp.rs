use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::repository::{EmailMessage, Notifier, NotifyError};
use crate::config::MailConfig;

/// Notifier delivering plain-text mail through an authenticated SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: &MailConfig) -> Result<Self, NotifyError> {
        let sender = parse_mailbox(&config.username)?;

        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|err| NotifyError::Transport(format!("SMTP relay error: {err}")))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self { transport, sender })
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, NotifyError> {
        Message::builder()
            .from(self.sender.clone())
            .to(parse_mailbox(&message.recipient)?)
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|err| NotifyError::Transport(format!("failed to build e-mail: {err}")))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse()
        .map_err(|err| NotifyError::InvalidAddress(format!("{address}: {err}")))
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        let email = self.build_message(message)?;
        self.transport
            .send(email)
            .await
            .map_err(|err| NotifyError::Transport(format!("failed to send e-mail: {err}")))?;
        Ok(())
    }
}
