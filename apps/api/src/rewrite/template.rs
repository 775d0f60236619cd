//! Template rewrite: the always-available, network-free fallback.

use crate::analysis::Goal;

/// Produces a fixed five-line structured rewrite of `text`.
pub fn rewrite_template(text: &str, goal: Goal) -> String {
    format!(
        "Role: You are a helpful assistant.\n\
         Goal: {goal}\n\
         Task: {task}\n\
         Constraints: Be clear, concise, and step-by-step.\n\
         Output format: Bulleted outline plus a one-sentence summary.",
        task = text.trim(),
    )
}
