use std::collections::HashMap;

/// Descriptions longer than this many words are shortened on the cards.
pub const DESCRIPTION_WORD_LIMIT: usize = 20;

pub const ELLIPSIS: &str = "...";

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `word_limit` words joined by single spaces plus [`ELLIPSIS`], or the
/// text unchanged when it is short enough. `None` (a description that was
/// not a string) yields an empty string.
pub fn truncate_text(text: Option<&str>, word_limit: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };
    if word_count(text) <= word_limit {
        return text.to_string();
    }
    let mut shortened = text
        .split_whitespace()
        .take(word_limit)
        .collect::<Vec<_>>()
        .join(" ");
    shortened.push_str(ELLIPSIS);
    shortened
}

pub fn needs_read_more(description: Option<&str>) -> bool {
    description.is_some_and(|text| word_count(text) > DESCRIPTION_WORD_LIMIT)
}

/// Flips the flag for `id`; flags start out collapsed.
pub fn toggle_expansion(expanded: &mut HashMap<String, bool>, id: &str) {
    let flag = expanded.entry(id.to_string()).or_insert(false);
    *flag = !*flag;
}

pub fn expansion_label(expanded: bool) -> &'static str {
    if expanded {
        "See less"
    } else {
        "Read more"
    }
}
