//! Description list rendering

use crate::attributes::Attributes;
use crate::templates::StringTemplater;

fn default_templates() -> StringTemplater {
	StringTemplater::with_templates(&[
		("list", "<dl{{attrs}}>{{content}}</dl>"),
		("term", "<dt{{attrs}}>{{content}}</dt>"),
		("definition", "<dd{{attrs}}>{{content}}</dd>"),
	])
}

/// Options for [`DescriptionHelper::render`]
///
/// `list` holds the `<dl>` element's attributes; no defaults are merged in.
#[derive(Debug, Clone, Default)]
pub struct DescriptionRenderOptions {
	pub list: Attributes,
}

/// Accumulates term/definition pairs and renders them as a `<dl>` list
///
/// Accumulated pairs are consumed by `render`; an empty accumulation still
/// emits the empty list container.
///
/// # Examples
///
/// ```
/// use bootstrap_ui::{DescriptionHelper, DescriptionRenderOptions};
///
/// let mut list = DescriptionHelper::new();
/// list.add("Name", "Ann");
/// assert_eq!(
///     list.render(&DescriptionRenderOptions::default()),
///     "<dl><dt>Name</dt><dd>Ann</dd></dl>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DescriptionHelper {
	templater: StringTemplater,
	entries: Vec<(String, String)>,
}

impl DescriptionHelper {
	pub fn new() -> Self {
		Self {
			templater: default_templates(),
			entries: Vec::new(),
		}
	}

	/// Replace one of the `list`/`term`/`definition` templates
	pub fn set_template(&mut self, name: impl Into<String>, template: impl Into<String>) {
		self.templater.set(name, template);
	}

	/// Append a term/definition pair
	pub fn add(&mut self, term: impl Into<String>, definition: impl Into<String>) -> &mut Self {
		self.entries.push((term.into(), definition.into()));
		self
	}

	/// Render and consume all accumulated pairs
	pub fn render(&mut self, options: &DescriptionRenderOptions) -> String {
		let entries = std::mem::take(&mut self.entries);
		let none = Attributes::new();

		let mut content = String::new();
		for (term, definition) in &entries {
			content.push_str(&self.templater.format("term", &none, term));
			content.push_str(&self.templater.format("definition", &none, definition));
		}

		self.templater.format("list", &options.list, &content)
	}
}

impl Default for DescriptionHelper {
	fn default() -> Self {
		Self::new()
	}
}
