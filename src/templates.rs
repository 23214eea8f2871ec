//! Named string templates with `{{attrs}}`/`{{content}}` placeholders
//!
//! Each helper owns a [`StringTemplater`] seeded with its default element
//! templates. Templates can be replaced at runtime to change the emitted
//! markup without touching helper logic.

use crate::attributes::{AttrValue, Attributes, escape_attr};
use indexmap::IndexMap;
use tracing::warn;

/// Format an attribute map as a markup fragment
///
/// Every formatted attribute is preceded by a single space, so a template
/// like `<div{{attrs}}>` renders as `<div class="card">`. Boolean `true`
/// renders as `key="key"`, boolean `false` is omitted. Key order is
/// insertion order; values are escaped.
///
/// # Examples
///
/// ```
/// use bootstrap_ui::Attributes;
/// use bootstrap_ui::templates::format_attributes;
///
/// let attrs = Attributes::new().with("class", "table").with("disabled", true);
/// assert_eq!(format_attributes(&attrs), r#" class="table" disabled="disabled""#);
/// assert_eq!(format_attributes(&Attributes::new()), "");
/// ```
pub fn format_attributes(attrs: &Attributes) -> String {
	let mut out = String::new();
	for (name, value) in attrs.iter() {
		match value {
			AttrValue::Str(text) => {
				out.push(' ');
				out.push_str(name);
				out.push_str("=\"");
				out.push_str(&escape_attr(text));
				out.push('"');
			}
			AttrValue::Bool(true) => {
				out.push(' ');
				out.push_str(name);
				out.push_str("=\"");
				out.push_str(name);
				out.push('"');
			}
			AttrValue::Bool(false) => {}
		}
	}
	out
}

/// A named set of element templates
///
/// # Examples
///
/// ```
/// use bootstrap_ui::{Attributes, StringTemplater};
///
/// let templater = StringTemplater::with_templates(&[("badge", "<span{{attrs}}>{{content}}</span>")]);
/// let attrs = Attributes::new().with("class", "badge");
/// assert_eq!(
///     templater.format("badge", &attrs, "New"),
///     r#"<span class="badge">New</span>"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringTemplater {
	templates: IndexMap<String, String>,
}

impl StringTemplater {
	pub fn new() -> Self {
		Self {
			templates: IndexMap::new(),
		}
	}

	pub fn with_templates(templates: &[(&str, &str)]) -> Self {
		let mut templater = Self::new();
		for (name, template) in templates {
			templater.set(*name, *template);
		}
		templater
	}

	/// Register or replace a named template
	pub fn set(&mut self, name: impl Into<String>, template: impl Into<String>) -> &mut Self {
		self.templates.insert(name.into(), template.into());
		self
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.templates.get(name).map(String::as_str)
	}

	/// Render a named template with the given attributes and content
	///
	/// Rendering is total: an unknown template name degrades to returning
	/// the content unchanged, with a warning.
	pub fn format(&self, name: &str, attrs: &Attributes, content: &str) -> String {
		let Some(template) = self.templates.get(name) else {
			warn!(template = name, "unknown template, passing content through");
			return content.to_string();
		};
		template
			.replace("{{attrs}}", &format_attributes(attrs))
			.replace("{{content}}", content)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_substitutes_attrs_and_content() {
		let templater = StringTemplater::with_templates(&[("row", "<tr{{attrs}}>{{content}}</tr>")]);
		let attrs = Attributes::new().with("id", "r1");

		assert_eq!(
			templater.format("row", &attrs, "<td>1</td>"),
			r#"<tr id="r1"><td>1</td></tr>"#
		);
	}

	#[test]
	fn test_format_empty_attrs() {
		let templater = StringTemplater::with_templates(&[("row", "<tr{{attrs}}>{{content}}</tr>")]);

		assert_eq!(templater.format("row", &Attributes::new(), "x"), "<tr>x</tr>");
	}

	#[test]
	fn test_unknown_template_passes_content_through() {
		let templater = StringTemplater::new();

		assert_eq!(templater.format("missing", &Attributes::new(), "kept"), "kept");
	}

	#[test]
	fn test_set_replaces_template() {
		let mut templater =
			StringTemplater::with_templates(&[("list", "<dl{{attrs}}>{{content}}</dl>")]);
		templater.set("list", "<div{{attrs}}>{{content}}</div>");

		assert_eq!(templater.format("list", &Attributes::new(), "x"), "<div>x</div>");
	}

	#[test]
	fn test_boolean_attributes() {
		let attrs = Attributes::new()
			.with("disabled", true)
			.with("hidden", false)
			.with("id", "b");

		assert_eq!(format_attributes(&attrs), r#" disabled="disabled" id="b""#);
	}

	#[test]
	fn test_attribute_values_are_escaped() {
		let attrs = Attributes::new().with("title", r#"a "quoted" <value>"#);

		assert_eq!(
			format_attributes(&attrs),
			r#" title="a &quot;quoted&quot; &lt;value&gt;""#
		);
	}
}
