//! Card rendering
//!
//! Single-shot: a card is rendered entirely from the call arguments, so
//! there is no accumulated state and nothing to reset.

use crate::attributes::Attributes;
use crate::templates::StringTemplater;

fn default_templates() -> StringTemplater {
	StringTemplater::with_templates(&[
		("card", "<div{{attrs}}>{{content}}</div>"),
		("header", "<div{{attrs}}>{{content}}</div>"),
		("body", "<div{{attrs}}>{{content}}</div>"),
		("footer", "<div{{attrs}}>{{content}}</div>"),
	])
}

fn default_attributes(element: &str) -> Attributes {
	match element {
		"card" => Attributes::new().with("class", "card"),
		"header" => Attributes::new().with("class", "card-header"),
		"body" => Attributes::new().with("class", "card-body"),
		"footer" => Attributes::new().with("class", "card-footer"),
		_ => Attributes::new(),
	}
}

/// Options for [`CardHelper::render`]
///
/// `attrs` are the outer card element's attributes, merged over the card
/// default (`class="card"`); the per-block attribute maps merge over the
/// matching `card-header`/`card-body`/`card-footer` defaults.
#[derive(Debug, Clone, Default)]
pub struct CardOptions {
	pub header: Option<String>,
	pub footer: Option<String>,
	pub header_attrs: Attributes,
	pub body_attrs: Attributes,
	pub footer_attrs: Attributes,
	pub attrs: Attributes,
}

/// Renders Bootstrap 5 cards with optional header and footer blocks
///
/// # Examples
///
/// ```
/// use bootstrap_ui::{CardHelper, CardOptions};
///
/// let card = CardHelper::new();
/// let html = card.render("Hello", &CardOptions::default());
/// assert_eq!(
///     html,
///     r#"<div class="card"><div class="card-body">Hello</div></div>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CardHelper {
	templater: StringTemplater,
}

impl CardHelper {
	pub fn new() -> Self {
		Self {
			templater: default_templates(),
		}
	}

	/// Replace one of the `card`/`header`/`body`/`footer` templates
	pub fn set_template(&mut self, name: impl Into<String>, template: impl Into<String>) {
		self.templater.set(name, template);
	}

	/// Render a card: header block (if set), body block, footer block (if set)
	pub fn render(&self, body: &str, options: &CardOptions) -> String {
		let mut content = String::new();

		if let Some(header) = &options.header {
			let attrs = options.header_attrs.merge_defaults(&default_attributes("header"));
			content.push_str(&self.templater.format("header", &attrs, header));
		}

		let body_attrs = options.body_attrs.merge_defaults(&default_attributes("body"));
		content.push_str(&self.templater.format("body", &body_attrs, body));

		if let Some(footer) = &options.footer {
			let attrs = options.footer_attrs.merge_defaults(&default_attributes("footer"));
			content.push_str(&self.templater.format("footer", &attrs, footer));
		}

		let card_attrs = options.attrs.merge_defaults(&default_attributes("card"));
		self.templater.format("card", &card_attrs, &content)
	}
}

impl Default for CardHelper {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_blocks_render_in_fixed_order() {
		let card = CardHelper::new();
		let options = CardOptions {
			header: Some("H".to_string()),
			footer: Some("F".to_string()),
			..Default::default()
		};
		let html = card.render("B", &options);

		let header_at = html.find("card-header").unwrap();
		let body_at = html.find("card-body").unwrap();
		let footer_at = html.find("card-footer").unwrap();
		assert!(header_at < body_at && body_at < footer_at);
	}

	#[test]
	fn test_caller_class_overrides_card_default() {
		let card = CardHelper::new();
		let options = CardOptions {
			attrs: Attributes::new().with("class", "card border-0"),
			..Default::default()
		};
		let html = card.render("x", &options);

		assert!(html.starts_with(r#"<div class="card border-0">"#));
	}
}
