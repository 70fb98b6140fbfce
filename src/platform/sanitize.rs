/// Normalize a raw platform string into a tag-safe form.
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single underscore, and strips leading and trailing
/// underscores. The result is safe to embed in package filenames.
///
/// Idempotent: sanitizing an already-sanitized string is a no-op.
pub fn sanitize_platform(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_separator = false;

    for c in raw.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_separator = false;
        } else if !in_separator {
            out.push('_');
            in_separator = true;
        }
    }

    out.trim_matches('_').to_string()
}
