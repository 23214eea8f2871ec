//! URL targets and the route-resolution seam
//!
//! Nav links accept either a literal URL or a named route with parameters.
//! Routes are turned into hrefs through the [`UrlResolver`] trait; the
//! bundled [`PatternResolver`] substitutes `{param}` placeholders in
//! registered path patterns.

use indexmap::IndexMap;

/// Where a nav link points
///
/// A bare string converts into [`LinkTarget::Url`] and bypasses resolution
/// entirely.
///
/// # Examples
///
/// ```
/// use bootstrap_ui::LinkTarget;
///
/// let literal: LinkTarget = "/dashboard".into();
/// assert_eq!(literal, LinkTarget::Url("/dashboard".to_string()));
///
/// let route = LinkTarget::route("user-detail", [("id", "42")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
	Url(String),
	Route {
		name: String,
		params: Vec<(String, String)>,
	},
}

impl LinkTarget {
	pub fn route(
		name: impl Into<String>,
		params: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
	) -> Self {
		LinkTarget::Route {
			name: name.into(),
			params: params
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

impl From<&str> for LinkTarget {
	fn from(url: &str) -> Self {
		LinkTarget::Url(url.to_string())
	}
}

impl From<String> for LinkTarget {
	fn from(url: String) -> Self {
		LinkTarget::Url(url)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum UrlError {
	#[error("no route named '{0}' is registered")]
	UnknownRoute(String),
	#[error("route '{route}' is missing a value for parameter '{param}'")]
	MissingParam { route: String, param: String },
}

/// Resolves a named route plus parameters into a literal URL
pub trait UrlResolver {
	fn resolve(&self, name: &str, params: &[(String, String)]) -> Result<String, UrlError>;
}

/// Pattern-based resolver substituting `{param}` placeholders
///
/// # Examples
///
/// ```
/// use bootstrap_ui::{PatternResolver, UrlResolver};
///
/// let mut resolver = PatternResolver::new();
/// resolver.add("user-detail", "/users/{id}/");
///
/// let url = resolver
///     .resolve("user-detail", &[("id".to_string(), "42".to_string())])
///     .unwrap();
/// assert_eq!(url, "/users/42/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternResolver {
	patterns: IndexMap<String, String>,
}

impl PatternResolver {
	pub fn new() -> Self {
		Self {
			patterns: IndexMap::new(),
		}
	}

	/// Register a pattern under a route name
	pub fn add(&mut self, name: impl Into<String>, pattern: impl Into<String>) -> &mut Self {
		self.patterns.insert(name.into(), pattern.into());
		self
	}
}

impl UrlResolver for PatternResolver {
	fn resolve(&self, name: &str, params: &[(String, String)]) -> Result<String, UrlError> {
		let pattern = self
			.patterns
			.get(name)
			.ok_or_else(|| UrlError::UnknownRoute(name.to_string()))?;

		let mut url = String::with_capacity(pattern.len());
		let mut chars = pattern.chars();
		while let Some(ch) = chars.next() {
			if ch != '{' {
				url.push(ch);
				continue;
			}
			let param: String = chars.by_ref().take_while(|&c| c != '}').collect();
			let value = params
				.iter()
				.find(|(key, _)| *key == param)
				.map(|(_, value)| value.as_str())
				.ok_or_else(|| UrlError::MissingParam {
					route: name.to_string(),
					param: param.clone(),
				})?;
			url.push_str(value);
		}
		Ok(url)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_multiple_params() {
		let mut resolver = PatternResolver::new();
		resolver.add("post-detail", "/users/{user}/posts/{post}/");

		let params = vec![
			("user".to_string(), "7".to_string()),
			("post".to_string(), "99".to_string()),
		];
		assert_eq!(
			resolver.resolve("post-detail", &params).unwrap(),
			"/users/7/posts/99/"
		);
	}

	#[test]
	fn test_resolve_without_params() {
		let mut resolver = PatternResolver::new();
		resolver.add("home", "/");

		assert_eq!(resolver.resolve("home", &[]).unwrap(), "/");
	}

	#[test]
	fn test_unknown_route() {
		let resolver = PatternResolver::new();

		let err = resolver.resolve("nope", &[]).unwrap_err();
		assert!(matches!(err, UrlError::UnknownRoute(name) if name == "nope"));
	}

	#[test]
	fn test_missing_param() {
		let mut resolver = PatternResolver::new();
		resolver.add("user-detail", "/users/{id}/");

		let err = resolver.resolve("user-detail", &[]).unwrap_err();
		assert!(matches!(err, UrlError::MissingParam { param, .. } if param == "id"));
	}
}
