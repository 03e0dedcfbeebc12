//! Locale-aware number formatting for human display.
//!
//! The core hands out plain `f64` values; this module is the optional last step
//! that turns them into strings such as `21 965 GWh` (Swedish grouping).

use num_format::{Locale, ToFormattedString};

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "sv";

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `sv`, `sv_SE`, `swedish`, `en`, `en_US`, `de`,
/// `fr`, `es`, `it`, `nl`, `nb`, `da`, `fi`. Unknown tags fall back to Swedish.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().replace('-', "_").as_str() {
        "en" | "us" | "en_us" | "en_gb" | "english" => (&Locale::en, '.'),
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        "nb" | "no" | "nb_no" => (&Locale::nb, ','),
        "da" | "da_dk" => (&Locale::da, ','),
        "fi" | "fi_fi" => (&Locale::fi, ','),
        _ => (&Locale::sv, ','), // default
    }
}

/// Format with thousands grouping; at most two decimals, trailing zeros trimmed.
pub fn format_number(value: f64, locale_tag: &str) -> String {
    if !value.is_finite() {
        return "–".to_string();
    }
    let (locale, dec_sep) = map_locale(locale_tag);
    let scaled = (value.abs() * 100.0).round();
    if scaled >= u64::MAX as f64 {
        // Too large for integer grouping.
        return format!("{value}");
    }
    let scaled = scaled as u64;
    let (int_part, frac_part) = (scaled / 100, scaled % 100);

    let mut out = String::new();
    if value < 0.0 && scaled > 0 {
        out.push_str(locale.minus_sign());
    }
    out.push_str(&int_part.to_formatted_string(locale));
    if frac_part > 0 {
        let frac = format!("{:02}", frac_part);
        out.push(dec_sep);
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// `format_number` followed by a space and the unit.
pub fn format_with_unit(value: f64, unit: &str, locale_tag: &str) -> String {
    format!("{} {}", format_number(value, locale_tag), unit)
}

/// Share in `[0, 1]` as a percentage with one decimal, e.g. `65.6%`.
pub fn format_percent(share: f64, locale_tag: &str) -> String {
    let (_, dec_sep) = map_locale(locale_tag);
    format!("{:.1}%", share * 100.0).replace('.', &dec_sep.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_grouping() {
        assert_eq!(format_number(82675.0, "en"), "82,675");
        assert_eq!(format_number(1_000_000.0, "en_US"), "1,000,000");
        assert_eq!(format_number(430.0, "en"), "430");
        assert_eq!(format_number(1234.5, "en"), "1,234.5");
        assert_eq!(format_number(-1234.0, "en"), "-1,234");
    }

    #[test]
    fn huge_values_are_not_truncated() {
        let huge = 1e30;
        assert_eq!(format_number(huge, "en"), format!("{huge}"));
        assert_eq!(format_number(-huge, "sv"), format!("{}", -huge));
    }

    #[test]
    fn swedish_uses_locale_separator() {
        let sep = Locale::sv.separator();
        assert_eq!(format_number(21965.0, "sv"), format!("21{sep}965"));
        assert_eq!(format_number(21965.0, "unknown"), format!("21{sep}965"));
        assert_eq!(format_with_unit(95.0, "GWh", "sv"), "95 GWh");
    }

    #[test]
    fn percent_uses_decimal_separator() {
        assert_eq!(format_percent(0.65638, "en"), "65.6%");
        assert_eq!(format_percent(0.65638, "de"), "65,6%");
    }
}
