//! Feature numbering and branch name derivation.

use std::path::Path;

/// Maximum number of slug words kept in a branch name
const MAX_SLUG_WORDS: usize = 3;

/// Fallback slug for descriptions with no alphanumeric content
const FALLBACK_WORD: &str = "unnamed";

/// Computes the next sequential feature number by scanning the immediate
/// children of the specs directory.
///
/// Each child directory contributes the number formed by the leading run of
/// decimal digits in its name (0 when there is none); the result is one more
/// than the highest such number. A missing or unreadable specs directory is
/// treated as empty, so the first feature is always 1.
#[must_use]
pub fn next_feature_number(specs_dir: &Path) -> u32 {
    let mut highest = 0;
    if let Ok(entries) = std::fs::read_dir(specs_dir) {
        for entry in entries.flatten() {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                let name = entry.file_name();
                highest = highest.max(leading_number(&name.to_string_lossy()));
            }
        }
    }
    highest + 1
}

fn leading_number(name: &str) -> u32 {
    let digits: String = name.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Derives the branch name `<NNN>-<slug>` from a feature number and a
/// free-text description.
#[must_use]
pub fn branch_name(number: u32, description: &str) -> String {
    format!("{:03}-{}", number, slug(description))
}

/// Slugs a free-text description into at most three kebab-case words.
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, trims hyphens at the ends, and keeps at
/// most the first three words. A description with no usable words normalizes
/// to `unnamed` rather than producing a dangling hyphen.
#[must_use]
pub fn slug(description: &str) -> String {
    let lowered = description.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .take(MAX_SLUG_WORDS)
        .collect();

    if words.is_empty() {
        FALLBACK_WORD.to_string()
    } else {
        words.join("-")
    }
}
