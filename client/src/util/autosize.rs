//! Auto-growing textarea height.
//!
//! The element's height is first reset to `auto` so `scrollHeight` reflects
//! the content alone; otherwise a previously grown box would never shrink.

#[cfg(test)]
#[path = "autosize_test.rs"]
mod autosize_test;

/// Smallest rendered textarea height, matching the stylesheet's `min-height`.
pub const MIN_HEIGHT_PX: i32 = 80;

/// Height to apply for a measured `scroll_height`.
#[must_use]
pub fn fit_height(scroll_height: i32) -> i32 {
    scroll_height.max(MIN_HEIGHT_PX)
}

/// CSS value for a pixel height.
#[must_use]
pub fn px(height: i32) -> String {
    format!("{height}px")
}

/// Resize `el` to fit its content. Returns the applied height.
#[cfg(feature = "hydrate")]
pub fn adjust_height(el: &web_sys::HtmlElement) -> i32 {
    let style = el.style();
    let _ = style.set_property("height", "auto");
    let height = fit_height(el.scroll_height());
    let _ = style.set_property("height", &px(height));
    height
}
