//! Small text helpers for rendering commit messages and labels.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `http://` or `https://` up to a space, tab, newline or `<`.
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^ \t\n<]*").expect("Invalid URL pattern"));

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("Invalid line break pattern"));

/// A bug reference such as `skia:123`.
static BUG_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(chromium|skia):((?-u:[0-9])+)").expect("Invalid bug reference pattern")
});

/// An ASCII word character at the start of the text or after a non-word
/// character.
static WORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9A-Za-z_])((?-u:\w))").expect("Invalid word start pattern")
});

fn issue_tracker(project: &str) -> &'static str {
    match project {
        "chromium" => "http://crbug.com/",
        _ => "http://skbug.com/",
    }
}

/// Turns bug references like `skia:123` and `chromium:456` into links that
/// open in a new window.
///
/// ```
/// assert_eq!(
///     human::linkify_bugs("see skia:123"),
///     r#"see <a href="http://skbug.com/123" target="_blank">skia:123</a>"#,
/// );
/// ```
#[must_use]
pub fn linkify_bugs(s: &str) -> String {
    BUG_REFERENCE
        .replace_all(s, |caps: &Captures<'_>| {
            format!(
                r#"<a href="{}{}" target="_blank">{}</a>"#,
                issue_tracker(&caps[1]),
                &caps[2],
                &caps[0]
            )
        })
        .into_owned()
}

/// Renders plain text as HTML: links URLs, turns line breaks into `<br/>`
/// and links bug references.
///
/// A URL runs until a space, tab, `\n` or `<`; a `\r` inside it is kept and
/// later rendered as a line break. The text is not otherwise escaped.
#[must_use]
pub fn format_html(s: &str, links_in_new_window: bool) -> String {
    let anchor = if links_in_new_window {
        r#"<a href="${0}" target="_blank">${0}</a>"#
    } else {
        r#"<a href="${0}">${0}</a>"#
    };
    let linked = URL.replace_all(s, anchor);
    let broken = LINE_BREAK.replace_all(&linked, "<br/>");
    linkify_bugs(&broken)
}

/// Sorts strings ignoring case, keeping the input order of strings that
/// differ only by case.
pub fn sort_strings(strings: &mut [String]) {
    strings.sort_by_cached_key(|s| s.to_lowercase());
}

/// Upper-cases every ASCII word character that starts a word.
///
/// Word characters are ASCII letters, digits and `_`; anything else,
/// including non-ASCII letters, separates words.
///
/// ```
/// assert_eq!(human::to_cap_words("hello big-world"), "Hello Big-World");
/// ```
#[must_use]
pub fn to_cap_words(s: &str) -> String {
    WORD_START
        .replace_all(s, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_ascii_uppercase())
        })
        .into_owned()
}
