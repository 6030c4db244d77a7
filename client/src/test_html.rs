//! Server-render helpers for component markup tests.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render `build`'s view to an HTML string inside a fresh reactive owner.
pub(crate) fn render_html<V: RenderHtml>(build: impl FnOnce() -> V) -> String {
    Owner::new().with(|| build().to_html())
}

/// Opening tag of the first element whose class attribute is exactly `class`.
pub(crate) fn tag_with_class<'a>(html: &'a str, class: &str) -> Option<&'a str> {
    let needle = format!("class=\"{class}\"");
    let at = html.find(&needle)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}

/// Number of elements whose class attribute is exactly `class`.
pub(crate) fn count_class(html: &str, class: &str) -> usize {
    html.matches(&format!("class=\"{class}\"")).count()
}
