//! Class attribute composition.

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

/// Join class lists, dropping empty entries and normalizing whitespace.
#[must_use]
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
