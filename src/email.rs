use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

pub struct Notifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    admin: String,
}

impl Notifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            admin: config.admin_email.clone(),
        })
    }

    /// Tell the administrator about a new submission. Best effort: the caller
    /// logs failures and moves on.
    pub async fn send_submission_notice(&self, name: &str, page_url: &str) -> Result<(), String> {
        let body = format!("New video submitted by {name}.\n\nView it at: {page_url}");
        self.send("New Video Submission", &body).await
    }

    async fn send(&self, subject: &str, body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self
                .admin
                .parse()
                .map_err(|e| format!("Invalid admin address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
