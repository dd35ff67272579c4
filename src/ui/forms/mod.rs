//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `presenter`: text, checkbox and select presenters
//! - `field_renderer`: drawing for each presenter variant
//! - `signup_form`: the signup form and its action panel

mod field_renderer;
mod presenter;
mod signup_form;

pub use presenter::{signup_presenters, Presenter};
pub use signup_form::draw as draw_signup;
