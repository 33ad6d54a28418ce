//! HTML construction and rendering integration tests
//!
//! Success Criteria:
//! 1. Rendering the same tree twice yields identical strings in both modes
//! 2. Attributes are emitted in sorted key order regardless of insertion order
//! 3. Plain text is escaped exactly once, raw markup is emitted verbatim
//! 4. `true` attributes render bare, `false`/`None` attributes are omitted
//! 5. Void elements never get a closing tag and reject children
//! 6. The strict raw policy turns `raw()` into an error
//!
//! Test Categories:
//! - Determinism
//! - Escaping boundary
//! - Boolean attributes
//! - Void elements
//! - Raw policy
//! - Pretty printing

use proptest::prelude::*;
use rstest::*;
use serial_test::serial;
use trellis_html::{
	Attrs, ChildList, HtmlError, HtmlNode, RawPolicy, br, comment, div, element, fragment, input,
	li, meta, p, pre, raw, script, set_raw_policy, trusted_raw, ul,
};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn sample_tree() -> HtmlNode {
	let mut items = ChildList::new();
	for (i, label) in ["alpha", "beta & gamma"].iter().enumerate() {
		items.push(li([("data-index", i.to_string())], *label));
	}
	div(
		[("id", "root"), ("class", "list")],
		(p((), "Items:"), ul((), items), br(())),
	)
}

// ============================================================================
// Determinism
// ============================================================================

/// Tests that both renderers are stable across calls
#[rstest]
fn test_render_is_deterministic(sample_tree: HtmlNode) {
	assert_eq!(sample_tree.render_to_string(), sample_tree.render_to_string());
	assert_eq!(sample_tree.render_pretty(), sample_tree.render_pretty());
	assert_eq!(sample_tree.clone().render_to_string(), sample_tree.render_to_string());
}

/// Tests the documented attribute ordering example
#[rstest]
fn test_attribute_order_is_sorted() {
	let node = div([("z", "3"), ("a", "1"), ("m", "2")], "x");
	assert_eq!(node.render_to_string(), r#"<div a="1" m="2" z="3">x</div>"#);
}

proptest! {
	/// Tests that any permutation of the same attributes renders identically
	#[test]
	fn prop_attribute_insertion_order_is_irrelevant(
		mut pairs in proptest::collection::btree_map("[a-z]{1,6}", "[ -~]{0,8}", 0..8)
			.prop_map(|m| m.into_iter().collect::<Vec<_>>())
	) {
		let forward: Attrs = pairs.clone().into();
		pairs.reverse();
		let backward: Attrs = pairs.into();
		prop_assert_eq!(
			div(forward, ()).render_to_string(),
			div(backward, ()).render_to_string()
		);
	}

	/// Tests that text never leaks markup characters
	#[test]
	fn prop_text_is_escaped(text in "[ -~]{0,40}") {
		let html = p((), text.clone()).render_to_string();
		let inner = &html["<p>".len()..html.len() - "</p>".len()];
		prop_assert!(!inner.contains('<'));
		prop_assert!(!inner.contains('>'));
		prop_assert!(!inner.contains('"'));
	}
}

// ============================================================================
// Escaping boundary
// ============================================================================

/// Tests that script-like text is escaped while trusted markup is not
#[rstest]
#[serial(raw_policy)]
fn test_escaping_boundary() {
	set_raw_policy(RawPolicy::Permissive);
	let trusted = div((), raw("<b>ok</b>").unwrap());
	assert_eq!(trusted.render_to_string(), "<div><b>ok</b></div>");

	let untrusted = div((), "<script>alert(1)</script>");
	assert_eq!(
		untrusted.render_to_string(),
		"<div>&lt;script&gt;alert(1)&lt;/script&gt;</div>"
	);
}

/// Tests that no comment body can end the comment and expose markup
#[rstest]
#[case("--->")]
#[case(">x")]
#[case("->x")]
#[case("x-")]
#[case("-- -->")]
fn test_comment_cannot_terminate_early(#[case] body: &str) {
	let node = div((), comment(format!("{body}<b>injected</b>")));
	for html in [node.render_to_string(), node.render_pretty()] {
		let open = html.find("<!--").unwrap();
		let close = html.find("-->").unwrap();
		assert!(close > html.find("<b>injected</b>").unwrap(), "{html}");
		assert!(close > open + "<!--".len(), "{html}");
		assert_eq!(html.matches("-->").count(), 1, "{html}");
	}
}

/// Tests that attribute values are escaped exactly once
#[rstest]
fn test_attribute_values_escaped_once() {
	let node = div([("title", r#"a "quoted" & <tag>"#)], ());
	assert_eq!(
		node.render_to_string(),
		r#"<div title="a &quot;quoted&quot; &amp; &lt;tag&gt;"></div>"#
	);
}

// ============================================================================
// Boolean attributes
// ============================================================================

/// Tests the boolean attribute law on an input element
#[rstest]
fn test_boolean_attribute_law() {
	let html = input(
		Attrs::new()
			.with("disabled", true)
			.with("hidden", false)
			.with("required", None::<&str>)
			.with("value", "x"),
	)
	.render_to_string();
	assert!(html.contains(" disabled"));
	assert!(!html.contains(" hidden"));
	assert!(!html.contains(" required"));
	assert!(html.contains(r#" value="x""#));
}

// ============================================================================
// Void elements
// ============================================================================

#[rstest]
#[case(br(()), "<br>")]
#[case(meta([("charset", "utf-8")]), r#"<meta charset="utf-8">"#)]
fn test_void_elements_have_no_closing_tag(#[case] node: HtmlNode, #[case] expected: &str) {
	assert_eq!(node.render_to_string(), expected);
	assert_eq!(node.render_pretty(), format!("{expected}\n"));
}

/// Tests that runtime construction rejects children on void tags
#[rstest]
#[case("img")]
#[case("hr")]
#[case("input")]
fn test_void_element_with_children_rejected(#[case] tag: &'static str) {
	let err = element(tag, (), "child").unwrap_err();
	assert_eq!(
		err,
		HtmlError::VoidElementWithChildren {
			tag: tag.to_string()
		}
	);
	assert!(element(tag, (), (None::<&str>, false)).is_ok());
}

// ============================================================================
// Raw policy
// ============================================================================

/// Tests that strict mode rejects raw() but not trusted_raw()
#[rstest]
#[serial(raw_policy)]
fn test_strict_policy_rejects_raw() {
	set_raw_policy(RawPolicy::Strict);
	let result = raw("<i>x</i>");
	let trusted = trusted_raw("<i>x</i>");
	set_raw_policy(RawPolicy::Permissive);

	assert!(matches!(result, Err(HtmlError::RawPolicyViolation { .. })));
	assert_eq!(trusted.as_str(), "<i>x</i>");
}

// ============================================================================
// Pretty printing
// ============================================================================

/// Tests indentation, text inlining and verbatim bodies
#[rstest]
fn test_pretty_layout() {
	let tree = fragment((
		div(
			[("class", "card")],
			(p((), "short"), pre((), "  keep\n  spacing")),
		),
		script((), trusted_raw("let a = 1;\nlet b = 2;")),
	));
	assert_eq!(
		tree.render_pretty(),
		concat!(
			"<div class=\"card\">\n",
			"  <p>short</p>\n",
			"  <pre>  keep\n  spacing</pre>\n",
			"</div>\n",
			"<script>\n",
			"  let a = 1;\n",
			"  let b = 2;\n",
			"</script>\n",
		)
	);
}
