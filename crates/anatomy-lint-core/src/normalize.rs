//! Name normalization for matching.

/// Normalizes a node display name for part comparison.
///
/// Splits on `/`, trims each segment and returns the last segment lowercased,
/// so `"Accordion / Trigger"` and `"trigger"` compare equal.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.rsplit('/')
        .next()
        .map(str::trim)
        .unwrap_or_default()
        .to_lowercase()
}

/// Normalizes a component family name for rule-set resolution.
///
/// Lowercases and removes all whitespace and `/` characters.
#[must_use]
pub fn normalize_family(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_last_path_segment() {
        assert_eq!(normalize_name("Accordion / Item / Trigger"), "trigger");
        assert_eq!(normalize_name("  Panel  "), "panel");
        assert_eq!(normalize_name("ChevronIcon"), "chevronicon");
    }

    #[test]
    fn empty_and_trailing_slash() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("Trigger/"), "");
        assert_eq!(normalize_name("/"), "");
    }

    #[test]
    fn family_strips_whitespace_and_slashes() {
        assert_eq!(normalize_family("Accordion / Item"), "accordionitem");
        assert_eq!(normalize_family("Alert Dialog"), "alertdialog");
        assert_eq!(normalize_family("  "), "");
    }
}
