//! rsync filter pattern → fswatch exclusion regex
//!
//! rsync filter patterns and fswatch's `--exclude` regular expressions are
//! different grammars. Only the commonly used subset is translated:
//!
//! - anchoring: a leading `/` anchors at the watched root, anything else
//!   floats to any depth
//! - `?`, `*` and `**` wildcards
//! - the `dir/***` suffix (the directory and everything below it)
//!
//! Character classes (`[...]`) are refused instead of guessed at, because a
//! wrong guess could exclude paths that rsync would still transfer.

use std::path::Path;

use tracing::warn;

use crate::domain::value_objects::{FilterPattern, MatchExpression};
use crate::error::{SendError, SendResult};

/// Characters escaped everywhere.
///
/// `-`, `&` and `~` are only special inside character classes and make
/// fswatch's matcher choke when escaped outside of them.
const ALWAYS_ESCAPED: &[char] = &[
    '(', ')', '[', ']', '{', '}', '+', '|', '^', '$', '\\', '.', '\t', '\n', '\r', '\x0b', '\x0c',
];

/// Translate one rsync filter pattern into a regex anchored at `base`.
///
/// `base` is expected to be absolute. A directory-only pattern (trailing
/// `/`) is translated with a warning, since fswatch cannot tell files from
/// directories when excluding.
///
/// # Errors
///
/// [`SendError::UnsupportedSyntax`] if the pattern contains `[`.
pub fn translate(pattern: &FilterPattern, base: &Path) -> SendResult<MatchExpression> {
    translate_for_bases(pattern, &[base])
}

/// Like [`translate`], but the expression accepts any of `bases` as the
/// root, e.g. a symlinked root and its canonical form.
pub fn translate_for_bases(
    pattern: &FilterPattern,
    bases: &[&Path],
) -> SendResult<MatchExpression> {
    let original = pattern.as_str();
    let mut pat = original;

    let prefix = match bases {
        [base] => format!("^{}", escape_most(&base.to_string_lossy())),
        _ => {
            let alternatives: Vec<String> = bases
                .iter()
                .map(|base| escape_most(&base.to_string_lossy()))
                .collect();
            format!("^({})", alternatives.join("|"))
        }
    };

    // Head: the first rule that applies wins
    let head = if let Some(rest) = pat.strip_prefix('/') {
        pat = rest;
        "/"
    } else if let Some(rest) = pat.strip_prefix("**") {
        pat = rest;
        if rest.starts_with('/') {
            // `**/name` also matches `name` directly below the root
            "(/.*)?"
        } else {
            "/.*"
        }
    } else if let Some(rest) = pat.strip_prefix('*') {
        pat = rest;
        "/(.*/)?[^/]*"
    } else {
        "/(.*/)?"
    };

    let tail = if let Some(rest) = pat.strip_suffix("***") {
        pat = rest;
        "(/.*)?$"
    } else {
        "$"
    };

    if let Some(rest) = pat.strip_suffix('/') {
        warn!(
            pattern = original,
            "partially supported filter pattern: fswatch cannot match only directories, \
             this filter will match regardless of type"
        );
        pat = rest;
    }

    if pat.contains('[') {
        return Err(SendError::UnsupportedSyntax {
            pattern: original.to_string(),
        });
    }

    let body = translate_body(pat);

    Ok(MatchExpression::new(format!("{prefix}{head}{body}{tail}")))
}

/// Translate every pattern against the same roots, stopping at the first
/// unsupported one
pub fn translate_all<'a, I>(patterns: I, bases: &[&Path]) -> SendResult<Vec<MatchExpression>>
where
    I: IntoIterator<Item = &'a FilterPattern>,
{
    patterns
        .into_iter()
        .map(|pattern| translate_for_bases(pattern, bases))
        .collect()
}

/// Escape every regex metacharacter except `-`, `&`, `~`, `#` and space.
pub fn escape_most(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c == '?' || c == '*' || ALWAYS_ESCAPED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape literal text and turn wildcards into their regex equivalents:
/// `?` → one non-separator, `*` → a run of non-separators, `**` → anything.
fn translate_body(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str(".*");
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            c if ALWAYS_ESCAPED.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
