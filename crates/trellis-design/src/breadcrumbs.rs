//! Breadcrumb trails built from request paths.
//!
//! Request paths come from end users, so a segment with no registered label
//! is skipped rather than reported. Slot maps, which come from programmers,
//! stay strict.

use std::collections::BTreeMap;

use trellis_html::{HtmlNode, a, attrs, li, nav, ol, span};

use crate::context::RenderContext;
use crate::naming::NamingKind;

/// One entry of a trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
	/// Visible label.
	pub label: String,
	/// Link target.
	pub href: String,
}

/// Maps path segments to labels.
#[derive(Debug, Clone)]
pub struct Breadcrumbs {
	home_label: String,
	routes: BTreeMap<String, String>,
}

impl Breadcrumbs {
	/// A trail starting at `/` with the given label.
	pub fn new(home_label: impl Into<String>) -> Self {
		Self {
			home_label: home_label.into(),
			routes: BTreeMap::new(),
		}
	}

	/// Labels a path segment.
	pub fn route(mut self, segment: impl Into<String>, label: impl Into<String>) -> Self {
		self.routes.insert(segment.into(), label.into());
		self
	}

	/// Builds the trail for a request path. Query strings and fragments are
	/// ignored; unknown segments still count toward deeper hrefs.
	///
	/// ```
	/// use trellis_design::breadcrumbs::Breadcrumbs;
	///
	/// let crumbs = Breadcrumbs::new("Home")
	///     .route("docs", "Docs")
	///     .route("intro", "Introduction");
	/// let trail = crumbs.trail("/docs/v2/intro?tab=1");
	///
	/// let hrefs: Vec<_> = trail.iter().map(|c| c.href.as_str()).collect();
	/// assert_eq!(hrefs, ["/", "/docs", "/docs/v2/intro"]);
	/// ```
	pub fn trail(&self, request_path: &str) -> Vec<Crumb> {
		let path = request_path
			.split(['?', '#'])
			.next()
			.unwrap_or_default();

		let mut trail = vec![Crumb {
			label: self.home_label.clone(),
			href: "/".to_string(),
		}];
		let mut href = String::new();
		for segment in path.split('/').filter(|s| !s.is_empty()) {
			href.push('/');
			href.push_str(segment);
			match self.routes.get(segment) {
				Some(label) => trail.push(Crumb {
					label: label.clone(),
					href: href.clone(),
				}),
				None => tracing::debug!(segment, "skipping unlabelled path segment"),
			}
		}
		trail
	}

	/// Renders the trail as `nav > ol > li`. The last entry is the current
	/// page and is not a link.
	pub fn render(&self, ctx: &RenderContext, request_path: &str) -> HtmlNode {
		let trail = self.trail(request_path);
		let last = trail.len().saturating_sub(1);
		let items: Vec<HtmlNode> = trail
			.into_iter()
			.enumerate()
			.map(|(i, crumb)| {
				if i == last {
					li((), span(attrs!["aria-current" => "page"], crumb.label))
				} else {
					li((), a(attrs!["href" => crumb.href], crumb.label))
				}
			})
			.collect();

		nav(
			attrs![
				"aria-label" => "Breadcrumb",
				"class" => ctx.class_name("breadcrumbs", NamingKind::Component),
			],
			ol((), items),
		)
	}
}
