use crate::document::Document;

/// Build a document from environment variables matching `{PREFIX}__*`.
///
/// `PREFIX__SECTION__OPTION` sets `OPTION` in `SECTION`. Double underscore `__`
/// separates the two levels; single `_` is literal. Names are used verbatim,
/// since section and option lookup is case-sensitive. Any other shape is ignored.
///
/// Values stay text, exactly as an INI file would carry them, and are
/// interpreted by coercion at bind time.
///
/// Takes an iterator so tests can pass synthetic data instead of `std::env::vars()`.
pub fn env_to_document(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Document {
    let needle = format!("{prefix}__");
    let mut doc = Document::new();

    for (key, value) in vars {
        let Some(rest) = key.strip_prefix(&needle) else {
            continue;
        };
        let Some((section, option)) = rest.split_once("__") else {
            continue;
        };
        if section.is_empty() || option.is_empty() || option.contains("__") {
            continue;
        }

        doc.section_mut_or_insert(section).set(option, value);
    }

    doc
}
