use itertools::Itertools;

/// Joins items into an English list with an Oxford comma:
/// `"a"`, `"a and b"`, `"a, b, and c"`.
pub fn join_english<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => format!(
            "{}, and {}",
            head.iter().map(AsRef::as_ref).join(", "),
            last.as_ref()
        ),
    }
}

/// Uppercases the first letter of a phrase, leaving the rest untouched.
pub fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
