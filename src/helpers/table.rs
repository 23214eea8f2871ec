//! Table rendering

use crate::attributes::Attributes;
use crate::templates::StringTemplater;

fn default_templates() -> StringTemplater {
	StringTemplater::with_templates(&[
		("wrapper", "<div{{attrs}}>{{content}}</div>"),
		("table", "<table{{attrs}}>{{content}}</table>"),
		("header", "<thead{{attrs}}>{{content}}</thead>"),
		("body", "<tbody{{attrs}}>{{content}}</tbody>"),
		("row", "<tr{{attrs}}>{{content}}</tr>"),
		("headerCell", "<th{{attrs}}>{{content}}</th>"),
		("bodyCell", "<td{{attrs}}>{{content}}</td>"),
	])
}

fn default_attributes(element: &str) -> Attributes {
	match element {
		"wrapper" => Attributes::new().with("class", "table-responsive"),
		"table" => Attributes::new().with("class", "table"),
		_ => Attributes::new(),
	}
}

/// One table cell: content plus optional cell attributes
///
/// Bare content converts via `From`, so `vec![1.into(), "Ann".into()]`
/// builds a row without spelling out attribute maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
	content: String,
	attrs: Attributes,
}

impl Cell {
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
			attrs: Attributes::new(),
		}
	}

	pub fn with_attrs(content: impl Into<String>, attrs: Attributes) -> Self {
		Self {
			content: content.into(),
			attrs,
		}
	}
}

impl From<&str> for Cell {
	fn from(content: &str) -> Self {
		Cell::new(content)
	}
}

impl From<String> for Cell {
	fn from(content: String) -> Self {
		Cell::new(content)
	}
}

macro_rules! impl_cell_from_display {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Cell {
				fn from(content: $ty) -> Self {
					Cell::new(content.to_string())
				}
			}
		)*
	};
}

impl_cell_from_display!(i32, i64, u32, u64, usize, f64);

impl<C: Into<Cell>> From<(C, Attributes)> for Cell {
	fn from((content, attrs): (C, Attributes)) -> Self {
		let mut cell = content.into();
		cell.attrs = attrs;
		cell
	}
}

#[derive(Debug, Clone)]
struct Row {
	cells: Vec<Cell>,
	attrs: Attributes,
}

/// Options for [`TableHelper::render`]
///
/// `wrapper` and `table` merge per key over the built-in defaults
/// (`class="table-responsive"` / `class="table"`). `body` merges over
/// attributes previously set via [`TableHelper::body`], render-time keys
/// winning.
#[derive(Debug, Clone, Default)]
pub struct TableRenderOptions {
	pub wrapper: Attributes,
	pub table: Attributes,
	pub body: Attributes,
}

/// Accumulates header and body rows and renders a wrapped `<table>`
///
/// Header, rows and body attributes are all consumed by `render`. A
/// builder with no header and no rows still renders the wrapper and the
/// empty table element.
///
/// # Examples
///
/// ```
/// use bootstrap_ui::{Attributes, TableHelper, TableRenderOptions};
///
/// let mut table = TableHelper::new();
/// table.row(
///     vec![1.into(), "Ann".into()],
///     Attributes::new().with("id", "r1"),
/// );
/// assert_eq!(
///     table.render(&TableRenderOptions::default()),
///     "<div class=\"table-responsive\"><table class=\"table\">\
///      <tbody><tr id=\"r1\"><td>1</td> <td>Ann</td></tr></tbody></table></div>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TableHelper {
	templater: StringTemplater,
	header: Vec<Cell>,
	header_attrs: Attributes,
	rows: Vec<Row>,
	body_attrs: Attributes,
}

impl TableHelper {
	pub fn new() -> Self {
		Self {
			templater: default_templates(),
			header: Vec::new(),
			header_attrs: Attributes::new(),
			rows: Vec::new(),
			body_attrs: Attributes::new(),
		}
	}

	/// Replace one of the table templates
	pub fn set_template(&mut self, name: impl Into<String>, template: impl Into<String>) {
		self.templater.set(name, template);
	}

	/// Set the header row, replacing any previous one
	///
	/// `attrs` are the `<thead>` element's attributes.
	pub fn header(&mut self, cells: Vec<Cell>, attrs: Attributes) -> &mut Self {
		self.header = cells;
		self.header_attrs = attrs;
		self
	}

	/// Append a body row; `attrs` are that row's `<tr>` attributes
	pub fn row(&mut self, cells: Vec<Cell>, attrs: Attributes) -> &mut Self {
		self.rows.push(Row { cells, attrs });
		self
	}

	/// Set `<tbody>` attributes, independent of any per-row attributes
	pub fn body(&mut self, attrs: Attributes) -> &mut Self {
		self.body_attrs = attrs;
		self
	}

	/// Render and consume header, rows and body attributes
	pub fn render(&mut self, options: &TableRenderOptions) -> String {
		let wrapper_attrs = options.wrapper.merge_defaults(&default_attributes("wrapper"));
		let table_attrs = options.table.merge_defaults(&default_attributes("table"));

		let header = std::mem::take(&mut self.header);
		let header_attrs = std::mem::take(&mut self.header_attrs);
		let rows = std::mem::take(&mut self.rows);
		let stored_body = std::mem::take(&mut self.body_attrs);

		// Render-time body keys win; body() keys survive when absent.
		let mut body_attrs = options.body.clone();
		body_attrs.extend_missing(&stored_body);

		let mut inner = String::new();
		if !header.is_empty() {
			inner.push_str(&self.render_header(&header, &header_attrs));
		}
		if !rows.is_empty() {
			inner.push_str(&self.render_body(&rows, &body_attrs));
		}

		let table = self.templater.format("table", &table_attrs, &inner);
		self.templater.format("wrapper", &wrapper_attrs, &table)
	}

	fn render_header(&self, header: &[Cell], header_attrs: &Attributes) -> String {
		let cells: Vec<String> = header
			.iter()
			.map(|cell| self.templater.format("headerCell", &cell.attrs, &cell.content))
			.collect();
		let row = self
			.templater
			.format("row", &Attributes::new(), &cells.join(" "));
		self.templater.format("header", header_attrs, &row)
	}

	fn render_body(&self, rows: &[Row], body_attrs: &Attributes) -> String {
		let rendered: Vec<String> = rows
			.iter()
			.map(|row| {
				let cells: Vec<String> = row
					.cells
					.iter()
					.map(|cell| self.templater.format("bodyCell", &cell.attrs, &cell.content))
					.collect();
				self.templater.format("row", &row.attrs, &cells.join(" "))
			})
			.collect();
		self.templater.format("body", body_attrs, &rendered.join(" "))
	}
}

impl Default for TableHelper {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_body_merge_render_wins_stored_survives() {
		let mut table = TableHelper::new();
		table.body(Attributes::new().with("id", "stored").with("class", "old"));
		table.row(vec!["x".into()], Attributes::new());

		let options = TableRenderOptions {
			body: Attributes::new().with("class", "new"),
			..Default::default()
		};
		let html = table.render(&options);

		assert!(html.contains(r#"<tbody class="new" id="stored">"#));
	}

	#[test]
	fn test_header_replaced_wholesale() {
		let mut table = TableHelper::new();
		table.header(vec!["Old".into()], Attributes::new());
		table.header(vec!["New".into()], Attributes::new());
		let html = table.render(&TableRenderOptions::default());

		assert!(!html.contains("Old"));
		assert!(html.contains("<th>New</th>"));
	}
}
