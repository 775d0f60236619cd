// Follow-up suggestions: given the last exchange, propose two next prompts.
// The numbered-list parser is kept separate from the network call.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod suggester;
