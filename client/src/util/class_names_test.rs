use super::*;

#[test]
fn cn_joins_parts_with_single_spaces() {
    assert_eq!(cn(["textarea", "chat-page__composer"]), "textarea chat-page__composer");
}

#[test]
fn cn_skips_empty_and_collapses_whitespace() {
    assert_eq!(cn(["  a   b ", "", "c"]), "a b c");
    assert_eq!(cn(Vec::<&str>::new()), "");
}
