/// Normalize free text for comparison against canonical keys and aliases
///
/// Trims, lowercases and collapses every run of whitespace and/or hyphens
/// into a single `_`. Separators at either end are dropped. Underscores
/// already present are kept as-is, so the function is idempotent.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
            continue;
        }
        if pending_separator && !out.is_empty() {
            out.push('_');
        }
        pending_separator = false;
        out.extend(ch.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_forms() {
        assert_eq!(normalize("Sci-Fi"), "sci_fi");
        assert_eq!(normalize("  Science   Fiction "), "science_fiction");
        assert_eq!(normalize("coming - of - age"), "coming_of_age");
        assert_eq!(normalize("dark_academia"), "dark_academia");
    }

    #[test]
    fn test_edge_separators_dropped() {
        assert_eq!(normalize("-romance-"), "romance");
        assert_eq!(normalize("\t\n"), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Sci-Fi", "  Young   Adult", "self-help book", "a_-_b", "Ünïcode Tëxt", "42!?"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
