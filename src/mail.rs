/// Email delivery of the finished report
///
/// This module handles:
/// - SMTP settings gathered from the command line
/// - Building the report message (subject carries today's date)
/// - Sending through an SMTP relay, optionally with STARTTLS and AUTH
use crate::error::DeliveryError;
use crate::ui;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::{debug, warn};

/// Default SMTP port
pub const DEFAULT_SMTP_PORT: u16 = 25;

/// Where and how to send the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub to: String,
    pub from: String,
    pub server: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub tls: bool,
}

/// MIME subtype of the mailed report body (`text/plain`)
pub const REPORT_SUBTYPE: &str = "plain";

/// Anything that can deliver a report body
pub trait Mailer {
    fn send(&self, body: &str, subtype: &str) -> Result<(), DeliveryError>;
}

/// Subject line for a report sent on `date`
pub fn subject_for(date: chrono::NaiveDate) -> String {
    format!("Track status {}", date.format("%d/%m/%y"))
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| DeliveryError::Address { address: address.to_string(), message: e.to_string() })
}

/// Build the report message for `settings`
pub fn build_message(settings: &MailSettings, body: &str, subtype: &str) -> Result<Message, DeliveryError> {
    let content_type = ContentType::parse(&format!("text/{}; charset=utf-8", subtype))
        .map_err(|e| DeliveryError::Message(format!("bad content type text/{}: {}", subtype, e)))?;

    Message::builder()
        .from(parse_mailbox(&settings.from)?)
        .to(parse_mailbox(&settings.to)?)
        .subject(subject_for(chrono::Local::now().date_naive()))
        .header(content_type)
        .body(body.to_string())
        .map_err(|e| DeliveryError::Message(e.to_string()))
}

/// Sends through an SMTP relay
pub struct SmtpMailer {
    settings: MailSettings,
}

impl SmtpMailer {
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    fn transport(&self) -> Result<SmtpTransport, DeliveryError> {
        let s = &self.settings;
        let mut builder = if s.tls {
            SmtpTransport::starttls_relay(&s.server).map_err(|e| DeliveryError::Smtp(e.to_string()))?
        } else {
            SmtpTransport::builder_dangerous(&s.server)
        };
        builder = builder.port(s.port);

        if !s.user.is_empty() {
            builder = builder.credentials(Credentials::new(s.user.clone(), s.password.clone()));
        }

        Ok(builder.build())
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, body: &str, subtype: &str) -> Result<(), DeliveryError> {
        let message = build_message(&self.settings, body, subtype)?;
        debug!(
            "sending report to {} via {}:{} (tls: {})",
            self.settings.to, self.settings.server, self.settings.port, self.settings.tls
        );

        self.transport()?.send(&message).map_err(|e| DeliveryError::Smtp(e.to_string()))?;
        Ok(())
    }
}

/// Send the finished report, reporting but absorbing any delivery failure.
///
/// Returns whether the message was handed to the relay.
pub fn deliver_report(mailer: &dyn Mailer, report: &str) -> bool {
    match mailer.send(report, REPORT_SUBTYPE) {
        Ok(()) => {
            debug!("report delivered ({} bytes)", report.len());
            true
        }
        Err(e) => {
            warn!("report delivery failed: {}", e);
            ui::print_warning(&format!("could not email report: {}", e));
            false
        }
    }
}
