use thiserror::Error;

use crate::config::{CONTACT_RECIPIENT, CONTACT_SUBJECT_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn all() -> [Field; 3] {
        [Field::Name, Field::Email, Field::Message]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    EmptyField(Field),
    #[error("email address must look like name@domain")]
    InvalidEmail,
    #[error("a message is already being sent")]
    Busy,
    #[error("contact form is not open")]
    NotOpen,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Identifies one submission so that its timers can tell whether the form has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Proof that a handoff was passed to the platform. Nothing more is known about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Dispatched;

/// The platform's default mail-handling application.
pub trait MailHandler {
    fn dispatch(&self, request: &MailtoRequest) -> Dispatched;
}

/// A pre-filled compose request for the user's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoRequest {
    pub fn new(recipient: &str, name: &str, email: &str, message: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("{CONTACT_SUBJECT_PREFIX} {name}"),
            body: format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}"),
        }
    }

    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: SubmitStatus,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::all()
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            return Err(ContactError::EmptyField(field));
        }
        if !is_email_shaped(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn mailto(&self, recipient: &str) -> MailtoRequest {
        MailtoRequest::new(recipient, &self.name, &self.email, &self.message)
    }

    /// Validates, hands the compose request to `handler` and moves to `Submitting`.
    ///
    /// On error nothing changes and nothing is dispatched.
    pub fn submit<H: MailHandler>(
        &mut self,
        handler: &H,
    ) -> Result<(SubmissionTicket, Dispatched), ContactError> {
        if self.status != SubmitStatus::Idle {
            return Err(ContactError::Busy);
        }
        self.validate()?;
        let dispatched = handler.dispatch(&self.mailto(CONTACT_RECIPIENT));
        self.generation += 1;
        self.status = SubmitStatus::Submitting;
        Ok((SubmissionTicket(self.generation), dispatched))
    }

    fn is_current(&self, ticket: SubmissionTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Handoff delay elapsed: `Submitting` -> `Success`, unless the ticket is stale.
    pub fn handoff_elapsed(&mut self, ticket: SubmissionTicket) -> bool {
        if !self.is_current(ticket) || self.status != SubmitStatus::Submitting {
            return false;
        }
        self.status = SubmitStatus::Success;
        true
    }

    /// Success display elapsed: `Success` -> `Idle` with cleared fields, unless the ticket is stale.
    ///
    /// Returns whether the form was reset and the modal should close.
    pub fn success_elapsed(&mut self, ticket: SubmissionTicket) -> bool {
        if !self.is_current(ticket) || self.status != SubmitStatus::Success {
            return false;
        }
        self.reset();
        true
    }

    /// Clears every field and invalidates outstanding tickets.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = SubmitStatus::Idle;
        self.generation += 1;
    }
}

#[cfg(test)]
pub(crate) mod test_handler {
    use std::cell::RefCell;

    use super::{Dispatched, MailHandler, MailtoRequest};

    #[derive(Debug, Default)]
    pub struct RecordingHandler {
        pub sent: RefCell<Vec<String>>,
    }

    impl MailHandler for RecordingHandler {
        fn dispatch(&self, request: &MailtoRequest) -> Dispatched {
            self.sent.borrow_mut().push(request.to_uri());
            Dispatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_handler::RecordingHandler;
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ana Cruz");
        form.set(Field::Email, "ana@example.com");
        form.set(Field::Message, "Hello & welcome?\nLine two");
        form
    }

    #[test]
    fn test_mailto_uri_encoding() {
        let uri = filled().mailto("owner@example.com").to_uri();
        assert_eq!(
            uri,
            "mailto:owner@example.com?subject=Portfolio%20Contact%20from%20Ana%20Cruz\
             &body=Name%3A%20Ana%20Cruz%0AEmail%3A%20ana%40example.com%0A%0AMessage%3A%0A\
             Hello%20%26%20welcome%3F%0ALine%20two"
        );
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            ContactForm::new().validate(),
            Err(ContactError::EmptyField(Field::Name))
        );

        let mut form = filled();
        form.set(Field::Message, "   ");
        assert_eq!(
            form.validate(),
            Err(ContactError::EmptyField(Field::Message))
        );

        for bad in ["ana", "@example.com", "ana@", "ana@@example.com", "a na@x.com", "ana@x..com"] {
            let mut form = filled();
            form.set(Field::Email, bad);
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }

        for good in ["ana@example.com", "a.b+c@sub.example.ph", "x@localhost"] {
            let mut form = filled();
            form.set(Field::Email, good);
            assert_eq!(form.validate(), Ok(()), "{good}");
        }
    }

    #[test]
    fn test_submit_lifecycle() {
        let handler = RecordingHandler::default();
        let mut form = filled();
        let (ticket, _) = form.submit(&handler).unwrap();
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(handler.sent.borrow().len(), 1);
        assert!(handler.sent.borrow()[0].starts_with("mailto:montenegrokarlo@gmail.com?"));

        assert_eq!(form.submit(&handler), Err(ContactError::Busy));
        assert_eq!(handler.sent.borrow().len(), 1);

        // success before handoff is ignored
        assert!(!form.success_elapsed(ticket));
        assert!(form.handoff_elapsed(ticket));
        assert_eq!(form.status(), SubmitStatus::Success);
        assert!(form.success_elapsed(ticket));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");
    }

    #[test]
    fn test_invalid_submit_changes_nothing() {
        let handler = RecordingHandler::default();
        let mut form = filled();
        form.set(Field::Email, "");
        let before = form.clone();
        assert_eq!(
            form.submit(&handler),
            Err(ContactError::EmptyField(Field::Email))
        );
        assert_eq!(form, before);
        assert!(handler.sent.borrow().is_empty());
    }

    #[test]
    fn test_stale_ticket_after_reset() {
        let handler = RecordingHandler::default();
        let mut form = filled();
        let (ticket, _) = form.submit(&handler).unwrap();
        form.reset();
        form.set(Field::Name, "Typed later");
        assert!(!form.handoff_elapsed(ticket));
        assert!(!form.success_elapsed(ticket));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.value(Field::Name), "Typed later");
    }
}
