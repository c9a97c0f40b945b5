/// Scraper exports prefix names with a powertrain glyph; strip it before
/// keying so "🔋 Kia EV6" and "Kia EV6" collide.
const POWERTRAIN_GLYPHS: [char; 2] = ['\u{1F50B}', '\u{1F50C}'];

/// Canonical merge key for a vehicle name: glyphs stripped, trimmed,
/// lowercased.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || POWERTRAIN_GLYPHS.contains(&c))
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize_name("  Kia EV6 Long Range AWD "), "kia ev6 long range awd");
    }

    #[test]
    fn strips_scraper_glyphs() {
        assert_eq!(normalize_name("🔋 Kia EV6"), "kia ev6");
        assert_eq!(normalize_name("🔌 Toyota Prius Prime"), "toyota prius prime");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_name("   "), "");
    }
}
