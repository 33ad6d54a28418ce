//! Escaping helpers shared by both renderers.

use std::borrow::Cow;

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escapes a text node.
///
/// Text and attribute values share one table: `& < > " '` become
/// `&amp; &lt; &gt; &quot; &#x27;`. Quotes are escaped in text too, so a
/// string is safe in either position and [`escape_attr`] stays a plain
/// alias. Input without special characters is returned borrowed.
///
/// ```
/// use trellis_html::escape::escape_text;
///
/// assert_eq!(escape_text("plain"), "plain");
/// assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_text(s: &str) -> Cow<'_, str> {
	if !s.contains(SPECIAL) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escapes an attribute value. Attribute values use the same table as text.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
	escape_text(s)
}

/// Neutralises a comment body so it cannot close the comment early.
///
/// Every `--` is split with a space, repeatedly, so runs of any length
/// lose their meaning. A body starting with `>` or `-` and a body ending
/// in `-` are padded, since `<!-->`, `<!--->` and `--->` close a comment.
pub fn escape_comment(s: &str) -> Cow<'_, str> {
	let needs_padding_start = s.starts_with(['>', '-']);
	let needs_padding_end = s.ends_with('-');
	if !s.contains("--") && !needs_padding_start && !needs_padding_end {
		return Cow::Borrowed(s);
	}

	let mut body = s.to_string();
	while body.contains("--") {
		body = body.replace("--", "- -");
	}
	if needs_padding_start {
		body.insert(0, ' ');
	}
	if needs_padding_end {
		body.push(' ');
	}
	Cow::Owned(body)
}
