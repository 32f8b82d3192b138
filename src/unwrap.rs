//! Wrap tag removal
//!
//! Removes every `[wrap text="..."]` tag from a line. Everything else, line endings
//! included, is left as it was. Removal repeats until no tag remains, so a tag that only
//! appears once another one has been cut out is removed too; this keeps the operation
//! idempotent.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static WRAP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\[wrap text="[^"]*"\]"#).unwrap());

/// Strip all wrap tags from `line`.
pub fn strip_wrap_tags(line: &str) -> Cow<'_, str> {
    remove_wrap_tags(line).0
}

/// Strip all wrap tags from `line`, returning the text and how many tags were removed.
pub fn remove_wrap_tags(line: &str) -> (Cow<'_, str>, usize) {
    let mut removed = count_wrap_tags(line);
    if removed == 0 {
        return (Cow::Borrowed(line), 0);
    }

    let mut current = WRAP_TAG.replace_all(line, "").into_owned();
    loop {
        let found = count_wrap_tags(&current);
        if found == 0 {
            break;
        }
        removed += found;
        current = WRAP_TAG.replace_all(&current, "").into_owned();
    }
    (Cow::Owned(current), removed)
}

/// Number of wrap tags in `line`
pub fn count_wrap_tags(line: &str) -> usize {
    WRAP_TAG.find_iter(line).count()
}
