//! Staffing rule evaluation and rendering.
//!
//! Rules are authored externally (via the rule builder UI) and arrive as
//! pure data; this module decides which rules fire for a deployment
//! context and renders rules for display. Rule types themselves live in
//! [`crate::models`].

mod describe;
mod engine;

pub use describe::{describe_action, describe_condition, describe_rule};
pub use engine::evaluate;
