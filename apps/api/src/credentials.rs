//! Effective credential resolution.
//!
//! A caller-supplied `api_key` wins over the process-wide default. Only the
//! empty string counts as absent; any other value is passed through as-is.
//! When both are absent the orchestrators take their network-free path.

/// Returns the credential to use for a provider call, if any.
pub fn resolve_api_key<'a>(
    request_key: Option<&'a str>,
    default_key: Option<&'a str>,
) -> Option<&'a str> {
    non_empty(request_key).or_else(|| non_empty(default_key))
}

fn non_empty(key: Option<&str>) -> Option<&str> {
    key.filter(|k| !k.is_empty())
}
