//! OCR text canonicalization
//!
//! Plate lettering comes back from OCR with inconsistent casing, stray
//! separators, and the usual O/0 and I/1 confusions. Everything downstream
//! works on the canonical form produced here.

/// Canonicalize raw OCR fragments into a single comparable string.
///
/// Fragments are concatenated in scan order with no separator, upper-cased,
/// stripped of spaces and hyphens, and glyph-corrected (`O` reads as `0`,
/// `I` as `1` on plates). Pure and total: empty input yields an empty string.
pub fn normalize<S: AsRef<str>>(fragments: &[S]) -> String {
    let combined: String = fragments.iter().map(|s| s.as_ref()).collect();

    combined
        .to_uppercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .map(|c| match c {
            'O' => '0',
            'I' => '1',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenates_and_strips_separators() {
        assert_eq!(normalize(&["mh 12", "AB-1234"]), "MH12AB1234");
    }

    #[test]
    fn test_glyph_substitution() {
        assert_eq!(normalize(&["KA01HI2345"]), "KA01H12345");
        assert_eq!(normalize(&["OOII"]), "0011");
    }

    #[test]
    fn test_empty_input() {
        let fragments: [&str; 0] = [];
        assert_eq!(normalize(&fragments), "");
    }

    #[test]
    fn test_output_character_class() {
        let out = normalize(&["ka-01 ", " hi 23-45", "extra text"]);
        assert!(!out.contains(' '));
        assert!(!out.contains('-'));
        assert!(!out.chars().any(|c| c.is_lowercase()));
    }
}
