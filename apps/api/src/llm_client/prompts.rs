// Shared prompt-building utilities.
// Each orchestrator that needs LLM calls defines its own prompts.rs alongside it.

/// Fills `{name}` placeholders in a prompt template.
///
/// Substitution is single-pass over the template, so placeholder-like text
/// inside a value (a user prompt containing `{goal}`, say) is left alone.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
