//! HTML escaping for user-controlled text placed into markup.
//!
//! Activity names, descriptions, schedules and participant emails all come
//! from outside the server. Templates render with implicit escaping off and
//! pass each of these values through [`escape_html`] via the `escape_text`
//! filter.

use std::borrow::Cow;
use std::fmt::Display;

/// Replaces `& < > " '` with their entity forms.
///
/// Returns the input untouched when none of those characters occur.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..first]);
    for c in input[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Askama filters available to templates in `web::routes`.
pub mod filters {
    use super::*;

    pub fn escape_text<T: Display>(value: T) -> askama::Result<String> {
        Ok(escape_html(&value.to_string()).into_owned())
    }
}
