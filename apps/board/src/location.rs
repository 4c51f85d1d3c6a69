//! Mirrors the selected project into the page address.
//!
//! Query strings are handled as `application/x-www-form-urlencoded`, the same
//! encoding the browser's `URLSearchParams` uses.

use url::form_urlencoded;

/// Access to the query string of the current page address.
pub trait AddressBar {
    /// The current query string, with or without its leading `?`
    fn search(&self) -> String;

    /// Rewrites the query string in place: no new history entry, no navigation.
    fn replace_search(&mut self, query: &str);
}

fn pairs(search: &str) -> form_urlencoded::Parse<'_> {
    form_urlencoded::parse(search.strip_prefix('?').unwrap_or(search).as_bytes())
}

/// Value of `param` in `search`, verbatim.
///
/// For the selection parameter this is not checked against the project list.
pub fn read_param(search: &str, param: &str) -> Option<String> {
    pairs(search)
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
}

/// Returns `search` with `param` set to `value`.
///
/// The first existing occurrence is overwritten in place and any repeats are
/// dropped; a missing parameter is appended. Other parameters keep their order.
pub fn write_param(search: &str, param: &str, value: &str) -> String {
    let mut written = false;
    let mut updated = Vec::new();

    for (key, existing) in pairs(search) {
        if key == param {
            if !written {
                updated.push((key.into_owned(), value.to_string()));
                written = true;
            }
        } else {
            updated.push((key.into_owned(), existing.into_owned()));
        }
    }

    if !written {
        updated.push((param.to_string(), value.to_string()));
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(updated)
        .finish()
}
