//! Text clean-up and chunking applied before content reaches the document.

/// Strips characters that would corrupt the document XML.
///
/// NUL is removed outright. Every other control character below `0x20`
/// except newline and tab becomes a single space, as do the noncharacters
/// U+FFFE and U+FFFF, which XML also rejects.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\0' => {}
            '\n' | '\t' => out.push(ch),
            c if (c as u32) < 0x20 => out.push(' '),
            '\u{fffe}' | '\u{ffff}' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Splits `text` into slices of at most `size` characters.
///
/// Slices never split a code point and concatenate back to `text`.
/// A `size` of zero is treated as one.
pub fn chunks(text: &str, size: usize) -> Chunks<'_> {
    Chunks {
        rest: text,
        size: size.max(1),
    }
}

pub struct Chunks<'a> {
    rest: &'a str,
    size: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(self.size)
            .map_or(self.rest.len(), |(i, _)| i);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_nul_and_blanks_form_feed() {
        assert_eq!(sanitize("a\0b\x0cc"), "ab c");
    }

    #[test]
    fn keeps_newline_tab_and_unicode() {
        assert_eq!(sanitize("x\n\ty é \u{fffd}"), "x\n\ty é \u{fffd}");
    }

    #[test]
    fn replaces_carriage_return_and_escape() {
        assert_eq!(sanitize("a\r\nb\x1b[0m"), "a \nb [0m");
    }

    #[test]
    fn blanks_xml_noncharacters() {
        assert_eq!(sanitize("a\u{fffe}b\u{ffff}c"), "a b c");
    }

    #[test]
    fn sanitized_output_has_no_controls() {
        let all: String = (0u32..0x80).filter_map(char::from_u32).collect();
        let clean = sanitize(&all);
        assert!(
            clean
                .chars()
                .all(|c| c == '\n' || c == '\t' || (c as u32) >= 0x20)
        );
        assert!(!clean.contains('\0'));
    }

    #[test]
    fn chunks_are_lossless() {
        let text = "ab".repeat(1234);
        let parts: Vec<&str> = chunks(&text, 1000).collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 1000);
        assert_eq!(parts[2].len(), 468);
        assert_eq!(parts.concat(), text);
    }

    #[test]
    fn chunks_count_characters_not_bytes() {
        let text = "é".repeat(5);
        let parts: Vec<&str> = chunks(&text, 2).collect();
        assert_eq!(parts, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn empty_text_has_no_chunks() {
        assert_eq!(chunks("", 10).count(), 0);
    }
}
