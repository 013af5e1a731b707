//! Plain-text decoding of provider-supplied strings.
//!
//! The trivia provider encodes question and answer text with HTML entities.
//! All of it is untrusted third-party data, so it is decoded to plain text at
//! the data boundary and never interpreted as markup.

/// Decode HTML entities (`&amp;`, `&#039;`, `&#x27;`, ...) into plain text.
///
/// Unknown or malformed sequences pass through unchanged.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find(';') else {
            // No terminator anywhere after this point; the rest is literal.
            out.push_str(tail);
            return out;
        };

        match decode_entity(&tail[1..end]) {
            Some(decoded) => {
                out.push(decoded);
                rest = &tail[end + 1..];
            }
            None => {
                // Not an entity, keep the ampersand and rescan after it.
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "deg" => '\u{00b0}',
        "pound" => '\u{00a3}',
        "euro" => '\u{20ac}',
        "eacute" => '\u{00e9}',
        "aacute" => '\u{00e1}',
        "iacute" => '\u{00ed}',
        "oacute" => '\u{00f3}',
        "uacute" => '\u{00fa}',
        "ntilde" => '\u{00f1}',
        "ouml" => '\u{00f6}',
        "uuml" => '\u{00fc}',
        "szlig" => '\u{00df}',
        _ => return decode_numeric(name),
    };
    Some(decoded)
}

fn decode_numeric(name: &str) -> Option<char> {
    let code = name.strip_prefix('#')?;
    let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => code.parse::<u32>().ok()?,
    };
    char::from_u32(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_entities() {
        assert_eq!(
            decode_entities("Rock &amp; Roll &quot;Hits&quot;"),
            "Rock & Roll \"Hits\""
        );
        assert_eq!(decode_entities("&lt;html&gt;"), "<html>");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(decode_entities("Schr&#246;dinger&#039;s cat"), "Schrödinger's cat");
        assert_eq!(decode_entities("&#x27;quoted&#x27;"), "'quoted'");
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(decode_entities("What year was 1984 published?"), "What year was 1984 published?");
        assert_eq!(decode_entities(""), "");
    }

    #[test]
    fn keeps_unknown_sequences_literal() {
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("fish & chips; with salt"), "fish & chips; with salt");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("&#xzz;"), "&#xzz;");
    }

    #[test]
    fn decodes_adjacent_entities() {
        assert_eq!(decode_entities("&amp;&amp;&amp;"), "&&&");
    }

    #[test]
    fn markup_stays_inert_text() {
        // A hostile payload decodes to the literal characters, nothing more.
        let decoded = decode_entities("&lt;script&gt;alert(1)&lt;/script&gt;");
        assert_eq!(decoded, "<script>alert(1)</script>");
    }
}
