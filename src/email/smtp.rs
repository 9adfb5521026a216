//! SMTP-backed [`MailTransport`] built on lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment as LettreAttachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{EmailMessage, MailError, MailTransport};

/// Transport that relays through an SMTP server over STARTTLS.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Connect to `host` with the given credentials, sending as `from`.
    pub fn new(
        host: &str,
        username: impl Into<String>,
        password: impl Into<String>,
        from: &str,
    ) -> Result<Self, MailError> {
        let from = from
            .parse::<Mailbox>()
            .map_err(|_| MailError::InvalidAddress(from.to_string()))?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(username.into(), password.into()))
            .build();
        Ok(Self { transport, from })
    }

    fn build(&self, message: &EmailMessage) -> Result<Message, MailError> {
        let to = message
            .to
            .parse::<Mailbox>()
            .map_err(|_| MailError::InvalidAddress(message.to.clone()))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&message.subject);
        if let Some(reply_to) = &message.reply_to {
            let reply_to = reply_to
                .parse::<Mailbox>()
                .map_err(|_| MailError::InvalidAddress(reply_to.clone()))?;
            builder = builder.reply_to(reply_to);
        }

        let alternative = MultiPart::alternative()
            .singlepart(SinglePart::plain(message.body_text.clone()))
            .singlepart(SinglePart::html(message.body_html.clone()));

        let body = if message.attachments.is_empty() {
            alternative
        } else {
            let mut mixed = MultiPart::mixed().multipart(alternative);
            for attachment in &message.attachments {
                let content_type = attachment
                    .content_type
                    .parse::<ContentType>()
                    .map_err(|e| MailError::Build(e.to_string()))?;
                mixed = mixed.singlepart(
                    LettreAttachment::new(attachment.filename.clone())
                        .body(attachment.bytes.clone(), content_type),
                );
            }
            mixed
        };

        builder
            .multipart(body)
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let mail = self.build(message)?;
        self.transport
            .send(mail)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Transport(e.to_string()))
    }
}
