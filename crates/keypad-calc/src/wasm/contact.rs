//! Contact form on the portfolio page

use thiserror::Error;

use super::dom::{DomElement, DomEvent, MockDom};
use crate::notify::Notifier;

/// Element id of the form
pub const FORM_ID: &str = "contact-form";
const NAME_ID: &str = "contact-name";
const EMAIL_ID: &str = "contact-email";
const MESSAGE_ID: &str = "contact-message";

/// Contact form validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    /// At least one field is empty
    #[error("Please fill in all fields.")]
    MissingFields,
}

/// Submitted contact form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Creates a form from its three fields
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Reads the form fields from the page
    #[must_use]
    pub fn from_dom(dom: &MockDom) -> Self {
        let field = |id: &str| dom.get_value(id).unwrap_or_default().to_string();
        Self {
            name: field(NAME_ID),
            email: field(EMAIL_ID),
            message: field(MESSAGE_ID),
        }
    }

    /// Every field must be non-empty
    pub fn validate(&self) -> Result<(), ContactError> {
        let empty = [&self.name, &self.email, &self.message]
            .iter()
            .any(|f| f.is_empty());
        if empty {
            return Err(ContactError::MissingFields);
        }
        Ok(())
    }

    /// Confirmation shown after a successful submission
    #[must_use]
    pub fn acknowledgement(&self) -> String {
        format!(
            "Thank you, {}! Your message has been sent. I'll get back to you at {} soon.",
            self.name, self.email
        )
    }
}

/// Builds the contact form page
#[must_use]
pub fn contact_page() -> MockDom {
    let mut dom = MockDom::new();
    let fields = [
        DomElement::new("input").with_id(NAME_ID).with_attr("name", "name"),
        DomElement::new("input")
            .with_id(EMAIL_ID)
            .with_attr("name", "email")
            .with_attr("type", "email"),
        DomElement::new("textarea")
            .with_id(MESSAGE_ID)
            .with_attr("name", "message"),
    ];
    let mut form = DomElement::new("form").with_id(FORM_ID);
    for field in &fields {
        form = form.with_child(field.clone());
    }
    dom.root = form.clone();
    dom.register_element(form);
    for field in fields {
        dom.register_element(field);
    }
    dom
}

/// Handles submission: alerts either the validation error or the
/// acknowledgement, and clears the fields on success
pub fn submit(dom: &mut MockDom) -> Result<ContactForm, ContactError> {
    dom.dispatch_event(DomEvent::submit(FORM_ID));
    let form = ContactForm::from_dom(dom);
    if let Err(err) = form.validate() {
        dom.notify(&err.to_string());
        return Err(err);
    }
    dom.notify(&form.acknowledgement());
    for id in [NAME_ID, EMAIL_ID, MESSAGE_ID] {
        dom.dispatch_event(DomEvent::input(id, ""));
    }
    Ok(form)
}
