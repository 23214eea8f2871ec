//! Bootstrap Icons fragments

/// Render a Bootstrap Icons `<i>` fragment
///
/// # Examples
///
/// ```
/// use bootstrap_ui::icon;
///
/// assert_eq!(icon("gear"), r#"<i class="bi bi-gear"></i>"#);
/// ```
pub fn icon(name: &str) -> String {
	format!(r#"<i class="bi bi-{name}"></i>"#)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_icon_fragment() {
		assert_eq!(icon("house"), r#"<i class="bi bi-house"></i>"#);
	}
}
