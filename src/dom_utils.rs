//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Show/hide works through the inline `style` attribute because the
//! surrounding markup is server-rendered and we cannot rely on the page's
//! stylesheet defining utility classes for us.

use web_sys::Element;

const ORIGINAL_MARKUP_ATTR: &str = "data-original-markup";
const SPINNER_MARKUP: &str = "<span class=\"spinner\"></span>";

/// Make the element visible again by dropping the inline display override.
pub fn show(el: &Element) {
    let _ = el.remove_attribute("style");
}

/// Hide the element with an inline display override.
pub fn hide(el: &Element) {
    let _ = el.set_attribute("style", "display: none;");
}

/// Swap a trigger control into its busy state: spinner markup, disabled
/// attribute, original markup stashed on the element for `clear_busy`.
/// Calling it twice is harmless; the stash is only written once.
pub fn set_busy(el: &Element, busy_label: Option<&str>) {
    if el.get_attribute(ORIGINAL_MARKUP_ATTR).is_none() {
        let _ = el.set_attribute(ORIGINAL_MARKUP_ATTR, &el.inner_html());
    }
    match busy_label {
        Some(label) => el.set_inner_html(&format!("{} {}", SPINNER_MARKUP, label)),
        None => el.set_inner_html(SPINNER_MARKUP),
    }
    let _ = el.set_attribute("disabled", "disabled");
}

/// Restore a control put into the busy state by `set_busy`. Safe to call on
/// controls that were never busy.
pub fn clear_busy(el: &Element) {
    if let Some(original) = el.get_attribute(ORIGINAL_MARKUP_ATTR) {
        el.set_inner_html(&original);
        let _ = el.remove_attribute(ORIGINAL_MARKUP_ATTR);
    }
    let _ = el.remove_attribute("disabled");
}
