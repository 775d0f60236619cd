// Prompt analysis: pure, deterministic heuristics with no I/O.
// Both functions are total: any input, including empty text, yields a result.

pub mod goal;
pub mod quality;

pub use goal::{detect_goal, Goal};
pub use quality::score_prompt;
