//! Turns free-form user input into a `LIKE` pattern for the app catalog.


/// `^` and `$` anchor the match like in a regex, everything else is matched literally
/// with whitespace acting as a wildcard. Returns `None` for input too short to search for.
pub fn to_sql_search(input: &str) -> Option<String> {
    let input = input.trim();
    let mut chars = input.chars();
    let first = chars.next()?;
    if input.chars().count() < 2 || chars.all(|c| c == first) {
        return None;
    }

    let (anchored_start, rest) = match input.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (anchored_end, rest) = match rest.strip_suffix('$') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    let words = rest.split_whitespace().map(escape_like).collect::<Vec<_>>();
    if words.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(rest.len() + 2);
    if !anchored_start {
        pattern.push('%');
    }
    pattern.push_str(&words.join("%"));
    if !anchored_end {
        pattern.push('%');
    }
    Some(pattern)
}

// Paired with `ESCAPE '\'` in the query.
fn escape_like(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for c in word.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
