//! Ordered HTML attribute maps with default-merging semantics
//!
//! Every helper renders elements from an [`Attributes`] map. Insertion order
//! is render order, caller-supplied values always win over built-in defaults,
//! and re-assigning an existing key keeps its original position.

use indexmap::IndexMap;

/// A single HTML attribute value
///
/// Boolean attributes follow the HTML convention: `true` renders as
/// `key="key"`, `false` renders nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	Str(String),
	Bool(bool),
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Str(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Str(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

/// An insertion-ordered HTML attribute map
///
/// # Examples
///
/// ```
/// use bootstrap_ui::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.set("id", "main").set("class", "card");
/// assert_eq!(attrs.len(), 2);
/// assert!(attrs.contains("id"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
	map: IndexMap<String, AttrValue>,
}

impl Attributes {
	pub fn new() -> Self {
		Self {
			map: IndexMap::new(),
		}
	}

	/// Set an attribute, keeping the original position when the key exists
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
		self.map.insert(name.into(), value.into());
		self
	}

	/// Builder-style variant of [`set`](Self::set)
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_ui::Attributes;
	///
	/// let attrs = Attributes::new().with("class", "table").with("id", "users");
	/// assert_eq!(attrs.len(), 2);
	/// ```
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.set(name, value);
		self
	}

	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.map.get(name)
	}

	/// Remove an attribute, preserving the order of the remaining entries
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		self.map.shift_remove(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.map.contains_key(name)
	}

	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	pub fn len(&self) -> usize {
		self.map.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.map.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Merge built-in defaults under the caller-supplied attributes
	///
	/// Caller keys come first in caller order; default keys the caller did
	/// not supply follow in default order. Caller values win per key.
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_ui::Attributes;
	///
	/// let caller = Attributes::new().with("class", "custom");
	/// let defaults = Attributes::new().with("class", "card").with("role", "region");
	/// let merged = caller.merge_defaults(&defaults);
	///
	/// assert_eq!(merged.get("class"), caller.get("class"));
	/// assert_eq!(merged.get("role"), defaults.get("role"));
	/// ```
	pub fn merge_defaults(&self, defaults: &Attributes) -> Attributes {
		let mut merged = self.clone();
		merged.extend_missing(defaults);
		merged
	}

	/// Append entries from `other` whose keys are not already present
	pub fn extend_missing(&mut self, other: &Attributes) {
		for (name, value) in other.iter() {
			if !self.map.contains_key(name) {
				self.map.insert(name.to_string(), value.clone());
			}
		}
	}
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attributes::new();
		for (name, value) in iter {
			attrs.set(name, value);
		}
		attrs
	}
}

/// Escape an attribute value for embedding between double quotes
///
/// Element content is never escaped by this crate; attribute values are.
///
/// # Examples
///
/// ```
/// use bootstrap_ui::attributes::escape_attr;
///
/// assert_eq!(escape_attr("plain"), "plain");
/// assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
/// assert_eq!(escape_attr("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			_ => result.push(ch),
		}
	}
	result
}
