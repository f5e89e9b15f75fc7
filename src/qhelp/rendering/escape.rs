//! Entity decoding for link destinations
//!
//! Escaping for output goes through `html_escape`. Destinations need the inverse, restricted to
//! the three references the source format itself produces when it escapes a destination: `&amp;`,
//! `&lt;` and `&gt;`. Anything else, `&quot;` and numeric references included, is literal text
//! and must reach the context lookup unchanged, so a general HTML entity decoder does not fit.

/// Decode the `&amp;`, `&lt;` and `&gt;` entity references, left to right.
///
/// Other `&` sequences are kept as they are.
pub fn unescape_entities(text: &str) -> String {
    const ENTITIES: [(&str, char); 3] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>')];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
