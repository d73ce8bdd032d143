//! Mock DOM for the calculator page
//!
//! Models just enough of a browser page to drive the calculator without
//! web-sys: elements with text and attributes, the events the page listens
//! for, and a log of `alert` messages.

use std::collections::HashMap;

use crate::keypad::Keypad;
use crate::notify::Notifier;

/// Element id of the primary display
pub const DISPLAY_ID: &str = "calc-display";
/// Element id of the pending-expression line
pub const HISTORY_ID: &str = "calc-history";
/// Element id of the tape list
pub const TAPE_ID: &str = "calc-tape";
/// Element id of the keypad container
pub const KEYPAD_ID: &str = "calc-keypad";

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes, including `value` for inputs
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Appends a child
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class once
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Whether the element carries `class`
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Form field value, empty when unset
    #[must_use]
    pub fn value(&self) -> &str {
        self.get_attr("value").unwrap_or_default()
    }
}

/// Events the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Button click
    Click {
        /// Clicked element
        element_id: String,
    },
    /// Document-level keydown
    KeyPress {
        /// `KeyboardEvent.key`
        key: String,
    },
    /// Form field edit
    Input {
        /// Edited element
        element_id: String,
        /// New value
        value: String,
    },
    /// Form submission
    Submit {
        /// Submitted form
        element_id: String,
    },
}

impl DomEvent {
    /// Click on `element_id`
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Keydown with `key`
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }

    /// Edit of a form field
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Submission of a form
    #[must_use]
    pub fn submit(element_id: &str) -> Self {
        Self::Submit {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM page
#[derive(Debug, Clone, Default)]
pub struct MockDom {
    /// Root element as built
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
    alerts: Vec<String>,
}

impl MockDom {
    /// Creates an empty page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page: history line, display, keypad, tape
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let history = DomElement::new("div")
            .with_id(HISTORY_ID)
            .with_class("calculator-history");
        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("calculator-display")
            .with_text("0");
        let tape = DomElement::new("ul").with_id(TAPE_ID).with_class("tape");

        let keypad = Keypad::new();
        let buttons: Vec<DomElement> = keypad
            .buttons()
            .iter()
            .map(|btn| {
                let mut elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("calculator-btn")
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string());
                if btn.span > 1 {
                    elem = elem.with_attr("data-span", &btn.span.to_string());
                }
                elem
            })
            .collect();
        let mut keypad_elem = DomElement::new("div")
            .with_id(KEYPAD_ID)
            .with_class("calculator-keys");
        for button in &buttons {
            keypad_elem = keypad_elem.with_child(button.clone());
        }

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(history.clone())
            .with_child(display.clone())
            .with_child(keypad_elem.clone())
            .with_child(tape.clone());

        for elem in [history, display, keypad_elem, tape].into_iter().chain(buttons) {
            dom.register_element(elem);
        }
        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event and applies its direct DOM effect
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::Input { element_id, value } = &event {
            if let Some(elem) = self.elements.get_mut(element_id) {
                elem.attributes.insert("value".to_string(), value.clone());
            }
        }
        self.event_history.push(event);
    }

    /// Events seen so far
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Sets element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Form field value by ID
    #[must_use]
    pub fn get_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(DomElement::value)
    }

    /// Appends a child to a registered parent and registers it
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        self.register_element(child);
    }

    /// Removes all children of a registered element
    pub fn clear_children(&mut self, id: &str) {
        let child_ids: Vec<String> = self
            .elements
            .get(id)
            .map(|elem| {
                elem.children
                    .iter()
                    .filter(|c| !c.id.is_empty())
                    .map(|c| c.id.clone())
                    .collect()
            })
            .unwrap_or_default();
        for child_id in child_ids {
            self.elements.remove(&child_id);
        }
        if let Some(elem) = self.elements.get_mut(id) {
            elem.children.clear();
        }
    }

    /// Messages passed to `alert`, oldest first
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Notifier for MockDom {
    fn notify(&mut self, message: &str) {
        tracing::info!(message, "alert");
        self.alerts.push(message.to_string());
    }
}
