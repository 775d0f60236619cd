//! Prompt quality scoring, a weighted-heuristic rubric on a 0–100 scale.
//!
//! Base 50, plus independent additive bonuses for structure and constraints.
//! Empty prompts get a fixed floor of 10.

use std::sync::LazyLock;

use regex::Regex;

const EMPTY_SCORE: i32 = 10;
const BASE_SCORE: i32 = 50;

const ROLE_BONUS: i32 = 10;
const FORMAT_BONUS: i32 = 10;
const LENGTH_BONUS: i32 = 5;
const CONSTRAINT_BONUS: i32 = 10;
const SOURCES_BONUS: i32 = 5;

/// Prompts longer than this many characters earn `LENGTH_BONUS`.
const LENGTH_THRESHOLD: usize = 80;

const ROLE_INDICATORS: &[&str] = &["role:", "you are", "as a "];
const FORMAT_INDICATORS: &[&str] = &["output", "format", "json", "table"];
const SOURCE_INDICATORS: &[&str] = &["sources", "cite"];

/// Whole-word constraint vocabulary; "examples?" covers singular and plural.
static CONSTRAINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(audience|tone|length|deadline|examples?)\b")
        .expect("constraint pattern is valid")
});

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Scores prompt quality. Always returns a value in `0..=100`.
pub fn score_prompt(text: &str) -> u32 {
    if text.trim().is_empty() {
        return EMPTY_SCORE as u32;
    }

    let lowered = text.to_lowercase();
    let mut score = BASE_SCORE;

    if contains_any(&lowered, ROLE_INDICATORS) {
        score += ROLE_BONUS;
    }
    if contains_any(&lowered, FORMAT_INDICATORS) {
        score += FORMAT_BONUS;
    }
    if text.chars().count() > LENGTH_THRESHOLD {
        score += LENGTH_BONUS;
    }
    if CONSTRAINT_PATTERN.is_match(text) {
        score += CONSTRAINT_BONUS;
    }
    if contains_any(&lowered, SOURCE_INDICATORS) {
        score += SOURCES_BONUS;
    }

    score.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_score_floor() {
        assert_eq!(score_prompt(""), 10);
        assert_eq!(score_prompt("  \n\t "), 10);
    }

    #[test]
    fn test_plain_prompt_gets_base_score() {
        assert_eq!(score_prompt("tell me about cats"), 50);
    }

    #[test]
    fn test_every_bonus_stacks() {
        let prompt =
            "You are a senior editor. Output format: JSON table. Include examples and tone. Cite sources.";
        assert!(prompt.chars().count() > 80);
        // 50 + 10 (role) + 10 (format) + 5 (length) + 10 (constraint) + 5 (sources)
        assert_eq!(score_prompt(prompt), 90);
    }

    #[test]
    fn test_role_indicators() {
        assert_eq!(score_prompt("Role: historian"), 60);
        assert_eq!(score_prompt("answer as a pirate"), 60);
    }

    #[test]
    fn test_format_indicator() {
        assert_eq!(score_prompt("give me a table of planets"), 60);
    }

    #[test]
    fn test_length_bonus_counts_characters() {
        let short = "a".repeat(80);
        let long = "a".repeat(81);
        assert_eq!(score_prompt(&short), 50);
        assert_eq!(score_prompt(&long), 55);
        // 81 multi-byte characters are still 81 characters.
        assert_eq!(score_prompt(&"é".repeat(81)), 55);
        assert_eq!(score_prompt(&"é".repeat(41)), 50);
    }

    #[test]
    fn test_constraint_words_match_whole_words_only() {
        assert_eq!(score_prompt("keep the Tone friendly"), 60);
        assert_eq!(score_prompt("one example please"), 60);
        assert_eq!(score_prompt("two examples please"), 60);
        // "tones" and "lengthy" are not whole-word matches.
        assert_eq!(score_prompt("mix some tones"), 50);
        assert_eq!(score_prompt("a lengthy story"), 50);
    }

    #[test]
    fn test_sources_bonus() {
        assert_eq!(score_prompt("cite your work"), 55);
        assert_eq!(score_prompt("list sources"), 55);
    }

    #[test]
    fn test_score_never_exceeds_bounds() {
        let prompt = "Role: you are an analyst. Output JSON table for the audience with examples, \
                      tone and deadline. Cite sources and more sources.";
        let score = score_prompt(prompt);
        assert!(score <= 100);
        assert_eq!(score, 90);
    }
}
