//! HTML entity decoding for labels and contexts.
//!
//! The generator escapes index text for direct HTML display (`&lt;`, `&#160;`,
//! ...). The store keeps plain text, so blocks are decoded once at load.

/// Longest entity body we accept between `&` and `;` (`#x10FFFF` is 8 bytes).
const MAX_ENTITY_LEN: usize = 9;

/// Decode the HTML entities a documentation generator emits.
///
/// Unknown or unterminated entities pass through untouched.
pub(crate) fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let decoded = rest
            .find(';')
            .filter(|end| *end > 1 && *end <= MAX_ENTITY_LEN + 1)
            .and_then(|end| decode_entity(&rest[1..end]).map(|ch| (ch, end)));

        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &rest[end + 1..];
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

fn decode_entity(body: &str) -> Option<char> {
    match body {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = body.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(
            unescape("nullable_value_traits&lt; std::optional&lt; T &gt; &gt;"),
            "nullable_value_traits< std::optional< T > >"
        );
        assert_eq!(unescape("a &amp;&amp; b"), "a && b");
        assert_eq!(unescape("&quot;quoted&quot;"), "\"quoted\"");
        assert_eq!(unescape("&apos;"), "'");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(unescape("a&#160;b"), "a\u{a0}b");
        assert_eq!(unescape("&#x3C;tag&#x3E;"), "<tag>");
    }

    #[test]
    fn test_untouched_text_is_not_reallocated_wrong() {
        assert_eq!(unescape("operator()"), "operator()");
        assert_eq!(unescape(""), "");
    }

    #[test]
    fn test_unknown_entities_pass_through() {
        assert_eq!(unescape("&bogus;"), "&bogus;");
        assert_eq!(unescape("fish & chips"), "fish & chips");
        assert_eq!(unescape("trailing &"), "trailing &");
        assert_eq!(unescape("&;"), "&;");
    }

    #[test]
    fn test_overlong_body_is_not_an_entity() {
        assert_eq!(unescape("&waytoolongname;"), "&waytoolongname;");
    }
}
