//! Browser frontend
//!
//! The page logic runs against [`MockDom`] so it can be tested natively;
//! the `wasm` feature adds the real `wasm-bindgen` exports.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
pub mod contact;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::{BrowserAlert, BrowserCalculator};
pub use calculator::WasmCalculator;
pub use contact::{ContactError, ContactForm};
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, HISTORY_ID, KEYPAD_ID, TAPE_ID};
pub use driver::WasmDriver;
