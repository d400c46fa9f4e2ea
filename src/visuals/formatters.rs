pub fn format_tags<T: AsRef<str>>(tags: &[T]) -> String {
    if tags.is_empty() {
        "(wildcard only)".to_string()
    } else {
        tags.iter().map(|t| t.as_ref()).collect::<Vec<_>>().join(", ")
    }
}

pub fn format_required(required: bool) -> &'static str {
    if required { "yes" } else { "" }
}

pub fn format_default(default: &str) -> String {
    if default.is_empty() {
        "-".to_string()
    } else {
        default.to_string()
    }
}
