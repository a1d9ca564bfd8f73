//! Utility functions for visualization: locale mapping and tick number formatting.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Format a tick value with `precision` decimals and locale digit grouping,
/// e.g. `1990.0` → `1,990` for `en`.
pub fn format_tick(v: f64, precision: usize, locale: &Locale) -> String {
    let fixed = format!("{:.*}", precision, v.abs());
    let (int_part, frac) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let int: u64 = int_part.parse().unwrap_or(0);

    let mut out = String::new();
    // no "-0" for values that round to zero
    if v < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push_str(locale.minus_sign());
    }
    out.push_str(&int.to_formatted_string(locale));
    if let Some(f) = frac {
        out.push_str(locale.decimal());
        out.push_str(f);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_per_locale() {
        assert_eq!(format_tick(1990.0, 0, &Locale::en), "1,990");
        assert_eq!(format_tick(1990.0, 0, &Locale::de), "1.990");
        assert_eq!(format_tick(12.5, 1, &Locale::de), "12,5");
        assert_eq!(format_tick(25.0, 0, map_locale("EN_us")), "25");
    }

    #[test]
    fn negative_and_zero() {
        assert_eq!(format_tick(-2.0, 0, &Locale::en), "-2");
        assert_eq!(format_tick(-0.0001, 1, &Locale::en), "0.0");
    }
}
