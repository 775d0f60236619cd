//! Goal detection: classifies what a prompt is trying to accomplish.
//!
//! Classification is an ordered rule list evaluated first-match-wins over the
//! lower-cased prompt using plain substring checks. Order is load-bearing:
//! debugging keywords sit above generic code keywords so "debug my python
//! script" lands on `DebugCode`, not `WriteCode`.

use serde::{Serialize, Serializer};

/// The user's likely intent. Serialises as its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    DebugCode,
    WriteCode,
    Summarize,
    WriteMessage,
    WriteArticle,
    WriteContent,
    Analyze,
    Learn,
    Compare,
    Translate,
    Plan,
    Brainstorm,
    Review,
    General,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Goal::DebugCode => "debug or fix code",
            Goal::WriteCode => "generate or write code",
            Goal::Summarize => "summarize text or content",
            Goal::WriteMessage => "write an email or message",
            Goal::WriteArticle => "write an article or essay",
            Goal::WriteContent => "write or create content",
            Goal::Analyze => "analyze or interpret information",
            Goal::Learn => "learn or understand a concept",
            Goal::Compare => "compare ideas or options",
            Goal::Translate => "translate text",
            Goal::Plan => "create a plan or outline",
            Goal::Brainstorm => "brainstorm ideas",
            Goal::Review => "get feedback or review",
            Goal::General => "general reasoning or assistance",
        }
    }
}

impl Serialize for Goal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

type Rule = (&'static [&'static str], Goal);

/// Top-level rules, highest priority first.
/// `WriteContent` is refined further by `WRITING_RULES`.
const GOAL_RULES: &[Rule] = &[
    (&["debug", "fix bug", "error", "not working"], Goal::DebugCode),
    (&["code", "python", "javascript", "function", "script"], Goal::WriteCode),
    (&["summarize", "tl;dr", "summary", "condense"], Goal::Summarize),
    (&["write", "compose", "draft"], Goal::WriteContent),
    (&["analyze", "interpret", "examine"], Goal::Analyze),
    (&["explain", "what is", "how does", "why"], Goal::Learn),
    (&["compare", "versus", "vs", "difference between"], Goal::Compare),
    (&["translate", "translation"], Goal::Translate),
    (&["plan", "outline", "steps", "schedule", "roadmap"], Goal::Plan),
    (&["brainstorm", "ideas", "suggest"], Goal::Brainstorm),
    (&["review", "critique", "feedback"], Goal::Review),
];

/// Sub-rules inside the writing branch.
const WRITING_RULES: &[Rule] = &[
    (&["email", "letter", "message"], Goal::WriteMessage),
    (&["essay", "article", "blog", "post"], Goal::WriteArticle),
];

fn first_match(text: &str, rules: &[Rule]) -> Option<Goal> {
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|&(_, goal)| goal)
}

/// Detects the user's goal from raw prompt text.
pub fn detect_goal(text: &str) -> Goal {
    let lowered = text.to_lowercase();
    match first_match(&lowered, GOAL_RULES) {
        Some(Goal::WriteContent) => {
            first_match(&lowered, WRITING_RULES).unwrap_or(Goal::WriteContent)
        }
        Some(goal) => goal,
        None => Goal::General,
    }
}
