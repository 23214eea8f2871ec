//! Card helper tests
//!
//! Covers block ordering, attribute merging and template overrides.

use bootstrap_ui::{Attributes, CardHelper, CardOptions};
use rstest::rstest;

#[rstest]
fn test_render_default() {
	let card = CardHelper::new();
	let html = card.render("This is card body content", &CardOptions::default());

	assert_eq!(
		html,
		r#"<div class="card"><div class="card-body">This is card body content</div></div>"#
	);
}

#[rstest]
fn test_render_with_header() {
	let card = CardHelper::new();
	let options = CardOptions {
		header: Some("Custom Header".to_string()),
		..Default::default()
	};
	let html = card.render("Card content", &options);

	assert!(html.contains(r#"<div class="card-header">Custom Header</div>"#));
	assert!(html.contains("Card content"));
}

#[rstest]
fn test_render_with_footer() {
	let card = CardHelper::new();
	let options = CardOptions {
		footer: Some("Card Footer".to_string()),
		..Default::default()
	};
	let html = card.render("Card content", &options);

	assert!(html.contains(r#"<div class="card-footer">Card Footer</div>"#));
	assert!(html.contains("Card content"));
}

#[rstest]
fn test_render_with_header_and_footer() {
	let card = CardHelper::new();
	let options = CardOptions {
		header: Some("Top".to_string()),
		footer: Some("Bottom".to_string()),
		..Default::default()
	};
	let html = card.render("Middle", &options);

	assert_eq!(
		html,
		"<div class=\"card\"><div class=\"card-header\">Top</div>\
		 <div class=\"card-body\">Middle</div><div class=\"card-footer\">Bottom</div></div>"
	);
}

#[rstest]
fn test_header_absent_when_not_set() {
	let card = CardHelper::new();
	let html = card.render("x", &CardOptions::default());

	assert!(!html.contains("card-header"));
	assert!(!html.contains("card-footer"));
}

#[rstest]
fn test_custom_card_attributes() {
	let card = CardHelper::new();
	let options = CardOptions {
		attrs: Attributes::new().with("id", "profile-card"),
		..Default::default()
	};
	let html = card.render("x", &options);

	assert!(html.starts_with(r#"<div id="profile-card" class="card">"#));
}

#[rstest]
fn test_caller_class_overrides_default() {
	let card = CardHelper::new();
	let options = CardOptions {
		attrs: Attributes::new().with("class", "custom-card-class"),
		..Default::default()
	};
	let html = card.render("Card content", &options);

	assert!(html.contains(r#"class="custom-card-class""#));
	assert!(!html.contains(r#"class="card""#));
}

#[rstest]
fn test_block_attributes_merge_over_defaults() {
	let card = CardHelper::new();
	let options = CardOptions {
		header: Some("H".to_string()),
		footer: Some("F".to_string()),
		header_attrs: Attributes::new().with("id", "hd"),
		body_attrs: Attributes::new().with("class", "card-body p-0"),
		footer_attrs: Attributes::new().with("class", "card-footer text-muted"),
		..Default::default()
	};
	let html = card.render("B", &options);

	assert!(html.contains(r#"<div id="hd" class="card-header">H</div>"#));
	assert!(html.contains(r#"<div class="card-body p-0">B</div>"#));
	assert!(html.contains(r#"<div class="card-footer text-muted">F</div>"#));
}

#[rstest]
fn test_template_override() {
	let mut card = CardHelper::new();
	card.set_template("card", "<section{{attrs}}>{{content}}</section>");
	let html = card.render("x", &CardOptions::default());

	assert!(html.starts_with(r#"<section class="card">"#));
	assert!(html.ends_with("</section>"));
}

#[rstest]
fn test_content_not_escaped() {
	let card = CardHelper::new();
	let html = card.render("<b>Bold</b>", &CardOptions::default());

	assert!(html.contains("<b>Bold</b>"));
}
