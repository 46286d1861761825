// Accessibility helpers

/// Id of the polite live region that mirrors notices and cart changes.
pub const STATUS_REGION_ID: &str = "booth-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
/// Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #00D9C0;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Replaces the text of `#booth-status` if present. Assistive technology
/// announces the change without moving focus.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// CSS selector for the grid tile at `index`.
#[must_use]
pub fn tile_selector(index: usize) -> String {
    format!("[data-index='{index}']")
}
