//! User-agent dependencies: external CSS and JS a design system injects
//! into every page head.

use serde::Deserialize;
use trellis_html::{Attrs, HtmlNode, link, script};

use crate::error::{DesignError, Result};
use crate::naming::{NamingKind, NamingStrategy};

/// HTTP caching hints for an asset.
///
/// The core only annotates the emitted tag; serving the header is up to the
/// HTTP layer, which can read [`CacheDirectives::cache_control`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheDirectives {
	/// `max-age` in seconds.
	pub max_age_seconds: u64,
	/// Whether the content never changes at this URL.
	pub immutable: bool,
	/// Entity tag, if known.
	pub etag: Option<String>,
}

impl CacheDirectives {
	/// Creates directives with the given max age.
	pub fn max_age(seconds: u64) -> Self {
		Self {
			max_age_seconds: seconds,
			..Self::default()
		}
	}

	/// Marks the asset immutable.
	pub fn immutable(mut self) -> Self {
		self.immutable = true;
		self
	}

	/// Sets the entity tag.
	pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
		self.etag = Some(etag.into());
		self
	}

	/// The `Cache-Control` header value, e.g. `public, max-age=3600, immutable`.
	pub fn cache_control(&self) -> String {
		let mut value = format!("public, max-age={}", self.max_age_seconds);
		if self.immutable {
			value.push_str(", immutable");
		}
		value
	}
}

/// How an asset is linked from the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
	/// `<link rel="stylesheet">`
	Stylesheet,
	/// `<script src>`
	Script,
}

const SCRIPT_MIME_TYPES: &[&str] = &[
	"text/javascript",
	"application/javascript",
	"application/ecmascript",
	"text/ecmascript",
];

/// An external asset declared by a design system.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UaDependency {
	/// URL path (or absolute URL) the asset is served at.
	pub mount_point: String,
	/// Where the asset comes from, e.g. a package path or CDN URL.
	pub canonical_source: String,
	/// MIME type; decides between `<link>` and `<script>`.
	pub mime_type: String,
	/// Load a script as an ES module.
	#[serde(default)]
	pub as_module: bool,
	/// Caching hints.
	#[serde(default)]
	pub cache: Option<CacheDirectives>,
}

impl UaDependency {
	/// A CSS dependency served from `mount_point`.
	pub fn stylesheet(mount_point: impl Into<String>, canonical_source: impl Into<String>) -> Self {
		Self {
			mount_point: mount_point.into(),
			canonical_source: canonical_source.into(),
			mime_type: "text/css".to_string(),
			as_module: false,
			cache: None,
		}
	}

	/// A classic script dependency.
	pub fn script(mount_point: impl Into<String>, canonical_source: impl Into<String>) -> Self {
		Self {
			mime_type: "text/javascript".to_string(),
			..Self::stylesheet(mount_point, canonical_source)
		}
	}

	/// An ES module dependency.
	pub fn module(mount_point: impl Into<String>, canonical_source: impl Into<String>) -> Self {
		Self {
			as_module: true,
			..Self::script(mount_point, canonical_source)
		}
	}

	/// Attaches cache directives.
	pub fn with_cache(mut self, cache: CacheDirectives) -> Self {
		self.cache = Some(cache);
		self
	}

	/// Classifies the MIME type, ignoring parameters such as `charset`.
	pub fn kind(&self) -> Result<AssetKind> {
		let essence = self
			.mime_type
			.split(';')
			.next()
			.unwrap_or_default()
			.trim()
			.to_ascii_lowercase();
		if essence == "text/css" {
			Ok(AssetKind::Stylesheet)
		} else if SCRIPT_MIME_TYPES.contains(&essence.as_str()) {
			Ok(AssetKind::Script)
		} else {
			Err(DesignError::UnsupportedAsset {
				mount_point: self.mount_point.clone(),
				mime_type: self.mime_type.clone(),
			})
		}
	}

	/// Builds the head tag, annotated with cache directives when present.
	pub fn to_node(&self, naming: &dyn NamingStrategy) -> Result<HtmlNode> {
		let mut attrs = Attrs::new();
		if let Some(cache) = &self.cache {
			attrs.set(
				naming.data_attribute_name("cache-control", NamingKind::Asset),
				cache.cache_control(),
			);
			if let Some(etag) = &cache.etag {
				attrs.set(
					naming.data_attribute_name("etag", NamingKind::Asset),
					etag.clone(),
				);
			}
		}

		Ok(match self.kind()? {
			AssetKind::Stylesheet => link(
				attrs
					.with("href", self.mount_point.clone())
					.with("rel", "stylesheet"),
			),
			AssetKind::Script => script(
				attrs
					.with("src", self.mount_point.clone())
					.with("type", self.as_module.then_some("module")),
				(),
			),
		})
	}
}
