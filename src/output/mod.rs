//! Plan renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::plan::Plan;

/// Trait for rendering a retrieval plan to an output format.
pub trait OutputRenderer {
    /// Render the plan to a string.
    fn render(&self, plan: &Plan) -> String;
}
