//! Nav tabs and pills rendering
//!
//! The most stateful helper: two parallel collections, tabs (trigger plus
//! panel) and links (trigger only). Tabs wire their trigger to a panel via
//! the tab id; links resolve an href through the [`UrlResolver`] seam and
//! never produce panels.

use crate::attributes::{AttrValue, Attributes};
use crate::icons::icon;
use crate::templates::StringTemplater;
use crate::urls::{LinkTarget, UrlResolver};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

fn default_templates() -> StringTemplater {
	StringTemplater::with_templates(&[
		("nav", "<ul{{attrs}}>{{content}}</ul>"),
		("navItem", "<li{{attrs}}>{{content}}</li>"),
		("navButton", "<button{{attrs}}>{{content}}</button>"),
		("navLink", "<a{{attrs}}>{{content}}</a>"),
		("tabContent", "<div{{attrs}}>{{content}}</div>"),
		("tabPane", "<div{{attrs}}>{{content}}</div>"),
	])
}

fn default_attributes(element: &str) -> Attributes {
	match element {
		"nav" => Attributes::new().with("class", "nav").with("role", "tablist"),
		"navItem" => Attributes::new()
			.with("class", "nav-item")
			.with("role", "presentation"),
		"navButton" => Attributes::new()
			.with("class", "nav-link")
			.with("type", "button")
			.with("role", "tab"),
		"navLink" => Attributes::new().with("class", "nav-link"),
		"tabContent" => Attributes::new().with("class", "tab-content"),
		"tabPane" => Attributes::new()
			.with("class", "tab-pane")
			.with("role", "tabpanel")
			.with("tabindex", "0"),
		_ => Attributes::new(),
	}
}

/// Visual style of the nav container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavType {
	#[default]
	Tabs,
	Pills,
}

impl NavType {
	fn class(self) -> &'static str {
		match self {
			NavType::Tabs => "nav-tabs",
			NavType::Pills => "nav-pills",
		}
	}
}

/// Helper-level defaults, overridable per render call
///
/// Deserializable so applications can load nav defaults from settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
	#[serde(rename = "type")]
	pub nav_type: NavType,
	pub fade: bool,
	pub fill: bool,
	pub justified: bool,
	pub vertical: bool,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			nav_type: NavType::Tabs,
			fade: true,
			fill: false,
			justified: false,
			vertical: false,
		}
	}
}

/// Per-tab options
///
/// `active` left at `None` means the first tab added is the active one.
/// Remaining `attrs` land on the tab's trigger element.
#[derive(Debug, Clone, Default)]
pub struct TabOptions {
	pub icon: Option<String>,
	pub active: Option<bool>,
	pub disabled: bool,
	pub attrs: Attributes,
}

/// Per-link options; links are never implicitly active
#[derive(Debug, Clone, Default)]
pub struct LinkOptions {
	pub icon: Option<String>,
	pub active: bool,
	pub disabled: bool,
	pub attrs: Attributes,
}

/// Per-render overrides and container attributes
#[derive(Debug, Clone, Default)]
pub struct NavRenderOptions {
	pub nav_type: Option<NavType>,
	pub fade: Option<bool>,
	pub fill: Option<bool>,
	pub justified: Option<bool>,
	pub vertical: Option<bool>,
	pub nav_attrs: Attributes,
	pub content_attrs: Attributes,
}

#[derive(Debug, Clone)]
struct Tab {
	id: String,
	title: String,
	content: String,
	options: TabOptions,
}

#[derive(Debug, Clone)]
struct Link {
	title: String,
	target: LinkTarget,
	options: LinkOptions,
}

/// Renders Bootstrap 5 nav tabs or pills with tab-switching wiring
///
/// # Examples
///
/// ```
/// use bootstrap_ui::{NavHelper, NavRenderOptions, TabOptions};
///
/// let mut nav = NavHelper::new();
/// nav.add("home", "Home", "<p>Home content</p>", TabOptions::default());
/// let html = nav.render(&NavRenderOptions::default());
///
/// assert!(html.contains(r##"data-bs-target="#home""##));
/// assert!(html.contains(r#"aria-selected="true""#));
/// assert!(html.contains(r#"class="tab-pane fade show active""#));
/// ```
pub struct NavHelper {
	config: NavConfig,
	templater: StringTemplater,
	resolver: Option<Box<dyn UrlResolver>>,
	tabs: Vec<Tab>,
	links: Vec<Link>,
}

impl NavHelper {
	pub fn new() -> Self {
		Self::with_config(NavConfig::default())
	}

	pub fn with_config(config: NavConfig) -> Self {
		Self {
			config,
			templater: default_templates(),
			resolver: None,
			tabs: Vec::new(),
			links: Vec::new(),
		}
	}

	/// Attach the resolver used to turn route targets into hrefs
	pub fn with_resolver(mut self, resolver: Box<dyn UrlResolver>) -> Self {
		self.resolver = Some(resolver);
		self
	}

	pub fn config(&self) -> &NavConfig {
		&self.config
	}

	/// Replace one of the nav templates
	pub fn set_template(&mut self, name: impl Into<String>, template: impl Into<String>) {
		self.templater.set(name, template);
	}

	/// Add a tab with panel content
	///
	/// The id links the trigger to its panel, so it must be unique within
	/// one render pass.
	pub fn add(
		&mut self,
		id: impl Into<String>,
		title: impl Into<String>,
		content: impl Into<String>,
		options: TabOptions,
	) -> &mut Self {
		self.tabs.push(Tab {
			id: id.into(),
			title: title.into(),
			content: content.into(),
			options,
		});
		self
	}

	/// Add a navigational link (no panel content)
	pub fn add_link(
		&mut self,
		title: impl Into<String>,
		target: impl Into<LinkTarget>,
		options: LinkOptions,
	) -> &mut Self {
		self.links.push(Link {
			title: title.into(),
			target: target.into(),
			options,
		});
		self
	}

	/// Render the nav and, when tabs exist, their panel container
	///
	/// Consumes all accumulated tabs and links. Vertical layout with panel
	/// output wraps both in a flex container.
	pub fn render(&mut self, options: &NavRenderOptions) -> String {
		let nav_type = options.nav_type.unwrap_or(self.config.nav_type);
		let fade = options.fade.unwrap_or(self.config.fade);
		let fill = options.fill.unwrap_or(self.config.fill);
		let justified = options.justified.unwrap_or(self.config.justified);
		let vertical = options.vertical.unwrap_or(self.config.vertical);

		let tabs = std::mem::take(&mut self.tabs);
		let links = std::mem::take(&mut self.links);
		debug!(tabs = tabs.len(), links = links.len(), "rendering nav");

		let nav = self.render_container(
			&tabs,
			&links,
			nav_type,
			fill,
			justified,
			vertical,
			&options.nav_attrs,
		);

		let panels = if tabs.is_empty() {
			String::new()
		} else {
			self.render_panels(&tabs, fade, &options.content_attrs)
		};

		if vertical && !panels.is_empty() {
			format!(r#"<div class="d-flex align-items-start">{nav}{panels}</div>"#)
		} else {
			format!("{nav}{panels}")
		}
	}

	/// Render only the triggers, never panels
	pub fn render_nav(&mut self, options: &NavRenderOptions) -> String {
		let nav_type = options.nav_type.unwrap_or(self.config.nav_type);
		let fill = options.fill.unwrap_or(self.config.fill);
		let justified = options.justified.unwrap_or(self.config.justified);
		let vertical = options.vertical.unwrap_or(self.config.vertical);

		let tabs = std::mem::take(&mut self.tabs);
		let links = std::mem::take(&mut self.links);

		self.render_container(
			&tabs,
			&links,
			nav_type,
			fill,
			justified,
			vertical,
			&options.nav_attrs,
		)
	}

	#[allow(clippy::too_many_arguments)]
	fn render_container(
		&self,
		tabs: &[Tab],
		links: &[Link],
		nav_type: NavType,
		fill: bool,
		justified: bool,
		vertical: bool,
		nav_attrs: &Attributes,
	) -> String {
		let mut classes = vec!["nav", nav_type.class()];
		if fill {
			classes.push("nav-fill");
		}
		if justified {
			classes.push("nav-justified");
		}
		if vertical {
			classes.push("flex-column");
		}

		let mut attrs = nav_attrs.merge_defaults(&default_attributes("nav"));
		let mut class_value = classes.join(" ");
		// Caller-supplied class is appended to the computed list, never
		// replacing it.
		if let Some(AttrValue::Str(extra)) = nav_attrs.get("class") {
			class_value.push(' ');
			class_value.push_str(extra);
		}
		attrs.set("class", class_value);

		let items = self.render_items(tabs, links);
		self.templater.format("nav", &attrs, &items)
	}

	fn render_items(&self, tabs: &[Tab], links: &[Link]) -> String {
		let mut items = Vec::with_capacity(tabs.len() + links.len());

		for (index, tab) in tabs.iter().enumerate() {
			let active = tab.options.active.unwrap_or(index == 0);
			let disabled = tab.options.disabled;

			let mut attrs = tab.options.attrs.merge_defaults(&default_attributes("navButton"));
			attrs.set("data-bs-toggle", "tab");
			attrs.set("data-bs-target", format!("#{}", tab.id));
			attrs.set("aria-controls", tab.id.as_str());
			attrs.set("aria-selected", if active { "true" } else { "false" });

			let mut classes = vec!["nav-link"];
			if active {
				classes.push("active");
			}
			if disabled {
				classes.push("disabled");
				attrs.set("disabled", "disabled");
				attrs.set("tabindex", "-1");
				attrs.set("aria-disabled", "true");
			}
			attrs.set("class", classes.join(" "));

			let title = self.title_with_icon(&tab.title, tab.options.icon.as_deref());
			let button = self.templater.format("navButton", &attrs, &title);

			let item_attrs = default_attributes("navItem");
			items.push(self.templater.format("navItem", &item_attrs, &button));
		}

		for link in links {
			let active = link.options.active;
			let disabled = link.options.disabled;

			let mut attrs = link.options.attrs.merge_defaults(&default_attributes("navLink"));
			attrs.set("href", self.resolve_target(&link.target));

			let mut classes = vec!["nav-link"];
			if active {
				classes.push("active");
				attrs.set("aria-current", "page");
			}
			if disabled {
				classes.push("disabled");
				attrs.set("tabindex", "-1");
				attrs.set("aria-disabled", "true");
			}
			attrs.set("class", classes.join(" "));

			let title = self.title_with_icon(&link.title, link.options.icon.as_deref());
			let anchor = self.templater.format("navLink", &attrs, &title);

			// Link items carry no tablist role.
			let mut item_attrs = default_attributes("navItem");
			item_attrs.remove("role");
			items.push(self.templater.format("navItem", &item_attrs, &anchor));
		}

		items.join("\n")
	}

	fn render_panels(&self, tabs: &[Tab], fade: bool, content_attrs: &Attributes) -> String {
		let mut panes = Vec::with_capacity(tabs.len());

		for (index, tab) in tabs.iter().enumerate() {
			let active = tab.options.active.unwrap_or(index == 0);

			let mut attrs = default_attributes("tabPane");
			attrs.set("id", tab.id.as_str());
			attrs.set("aria-labelledby", format!("{}-tab", tab.id));

			let mut classes = vec!["tab-pane"];
			if fade {
				classes.push("fade");
			}
			if active {
				classes.push("show");
				classes.push("active");
			}
			attrs.set("class", classes.join(" "));

			panes.push(self.templater.format("tabPane", &attrs, &tab.content));
		}

		let wrapper_attrs = content_attrs.merge_defaults(&default_attributes("tabContent"));
		self.templater.format("tabContent", &wrapper_attrs, &panes.join("\n"))
	}

	fn title_with_icon(&self, title: &str, icon_name: Option<&str>) -> String {
		match icon_name {
			Some(name) => format!("{} {}", icon(name), title),
			None => title.to_string(),
		}
	}

	fn resolve_target(&self, target: &LinkTarget) -> String {
		match target {
			LinkTarget::Url(url) => url.clone(),
			LinkTarget::Route { name, params } => match &self.resolver {
				Some(resolver) => match resolver.resolve(name, params) {
					Ok(url) => url,
					Err(error) => {
						warn!(route = %name, %error, "route resolution failed, falling back to \"#\"");
						"#".to_string()
					}
				},
				None => {
					warn!(route = %name, "no URL resolver configured, falling back to \"#\"");
					"#".to_string()
				}
			},
		}
	}
}

impl Default for NavHelper {
	fn default() -> Self {
		Self::new()
	}
}
