use tracing::{error, info};

use super::domain::NewRegistration;
use super::repository::{EmailMessage, Notifier};

pub const CONFIRMATION_SUBJECT: &str = "Registration Confirmation";

/// Which confirmation body a recipient receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationTemplate {
    /// Greeting addressed to the registrant.
    Registrant,
    /// Copy for the office mailbox, headed by the registrant's name.
    Administrator,
}

impl ConfirmationTemplate {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Registrant => "registrant",
            Self::Administrator => "administrator",
        }
    }

    pub fn render(self, recipient: &str, registration: &NewRegistration) -> EmailMessage {
        let greeting = match self {
            Self::Registrant => format!(
                "Hello {},\n\nYou have successfully registered for {}.",
                registration.name, registration.course_name
            ),
            Self::Administrator => format!(
                "Name: {}\n\nSuccessfully registered for {}.",
                registration.name, registration.course_name
            ),
        };

        let body = format!(
            "{greeting}\nDetails:\nMobile: {}\nAmount: \u{20B9}{}\nPayment Status: {}\n\nThank you!",
            registration.mobile, registration.amount_text, registration.payment_status
        );

        EmailMessage {
            recipient: recipient.to_string(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            body,
        }
    }
}

/// Outcome of a best-effort dispatch. Used for logging only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failed: usize,
}

impl DeliveryReport {
    pub fn all_failed(&self) -> bool {
        self.delivered == 0 && self.failed > 0
    }
}

/// Send one confirmation per `(recipient, template)` pair, in order.
///
/// A failed send is logged and the next pair is still attempted; nothing here is surfaced to
/// the registrant.
pub async fn dispatch_confirmations(
    notifier: &dyn Notifier,
    registration: &NewRegistration,
    deliveries: &[(String, ConfirmationTemplate)],
) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    for (recipient, template) in deliveries {
        let message = template.render(recipient, registration);
        match notifier.send(&message).await {
            Ok(()) => {
                info!(%recipient, template = template.label(), "confirmation e-mail sent");
                report.delivered += 1;
            }
            Err(err) => {
                error!(
                    %recipient,
                    template = template.label(),
                    error = %err,
                    "confirmation e-mail failed"
                );
                report.failed += 1;
            }
        }
    }

    report
}
