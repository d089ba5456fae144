//! Indian rupee and percentage formatting for display and export
//!
//! Money uses the Indian numbering system: the last three digits form one
//! group and every group above that has two digits (`12,34,56,789`).
//! Compact notation uses thousands (K), lakhs (L) and crores (Cr).

/// Rupee symbol
pub const RUPEE: char = '\u{20B9}';

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Options for `format_inr`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Two decimal places when true, none when false
    pub show_decimals: bool,
    /// Prefix with the rupee symbol
    pub show_symbol: bool,
    /// Use K / L / Cr suffixes for amounts of 1,000 and above
    pub compact: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_decimals: true,
            show_symbol: true,
            compact: false,
        }
    }
}

impl FormatOptions {
    /// Compact form with symbol (`₹1.3L`)
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    /// Compact form without symbol (`1.3L`), used inside sentences that
    /// already carry the symbol
    pub fn compact_bare() -> Self {
        Self {
            compact: true,
            show_symbol: false,
            ..Self::default()
        }
    }
}

/// Format an amount in rupees
///
/// Compact notation only applies to amounts of at least 1,000; smaller and
/// negative amounts fall back to the grouped form.
pub fn format_inr(amount: f64, options: FormatOptions) -> String {
    let symbol = if options.show_symbol {
        RUPEE.to_string()
    } else {
        String::new()
    };

    if options.compact {
        if amount >= CRORE {
            return format!("{}{}Cr", symbol, to_fixed(amount / CRORE, 1));
        } else if amount >= LAKH {
            return format!("{}{}L", symbol, to_fixed(amount / LAKH, 1));
        } else if amount >= THOUSAND {
            return format!("{}{}K", symbol, to_fixed(amount / THOUSAND, 1));
        }
    }

    if !amount.is_finite() {
        return format!("{}{}", symbol, amount);
    }

    let decimals = if options.show_decimals { 2 } else { 0 };
    let fixed = to_fixed(amount.abs(), decimals);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    let mut out = format!("{}{}{}", sign, symbol, group_indian(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Format with default options (`₹1,30,000.00`)
pub fn format_money(amount: f64) -> String {
    format_inr(amount, FormatOptions::default())
}

/// Format a percentage already scaled 0-100 (`12.5%`)
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(value, decimals))
}

/// Format a whole count with Indian digit grouping (`1,00,000`)
pub fn format_count(value: u64) -> String {
    group_indian(&value.to_string())
}

/// Parse a formatted rupee string back to a number
///
/// Accepts the symbol, commas, whitespace and K / L / Cr suffixes.
/// Unparseable text yields 0.
pub fn parse_inr(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != RUPEE && *c != ',' && !c.is_whitespace())
        .collect();

    let (number, multiplier) = if let Some(n) = cleaned.strip_suffix("Cr") {
        (n, CRORE)
    } else if let Some(n) = cleaned.strip_suffix('L') {
        (n, LAKH)
    } else if let Some(n) = cleaned.strip_suffix('K') {
        (n, THOUSAND)
    } else {
        (cleaned.as_str(), 1.0)
    };

    match number.parse::<f64>() {
        Ok(v) if v.is_finite() => v * multiplier,
        _ => 0.0,
    }
}

/// Percentage change from `previous` to `current`, 0 when there is no base
pub fn calculate_growth(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Fixed-point rendering with half-away-from-zero rounding
fn to_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}

/// Insert Indian-system separators into a string of digits
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let lead = head.len() % 2;

    let mut groups: Vec<&str> = Vec::new();
    if lead > 0 {
        groups.push(&head[..lead]);
    }
    let mut i = lead;
    while i < head.len() {
        groups.push(&head[i..i + 2]);
        i += 2;
    }
    groups.push(tail);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_money(0.0), "₹0.00");
        assert_eq!(format_money(999.5), "₹999.50");
        assert_eq!(format_money(130000.0), "₹1,30,000.00");
        assert_eq!(format_money(2000000.0), "₹20,00,000.00");
        assert_eq!(format_money(123456789.0), "₹12,34,56,789.00");
        assert_eq!(format_money(-130000.0), "-₹1,30,000.00");
    }

    #[test]
    fn test_options() {
        let no_decimals = FormatOptions { show_decimals: false, ..Default::default() };
        assert_eq!(format_inr(50000.0, no_decimals), "₹50,000");

        let bare = FormatOptions { show_symbol: false, ..Default::default() };
        assert_eq!(format_inr(-270000.0, bare), "-2,70,000.00");
    }

    #[test]
    fn test_compact() {
        assert_eq!(format_inr(25_000_000.0, FormatOptions::compact()), "₹2.5Cr");
        assert_eq!(format_inr(130_000.0, FormatOptions::compact()), "₹1.3L");
        assert_eq!(format_inr(50_000.0, FormatOptions::compact()), "₹50.0K");
        assert_eq!(format_inr(300_000.0, FormatOptions::compact_bare()), "3.0L");
        // Below a thousand and negatives are not abbreviated
        assert_eq!(format_inr(950.0, FormatOptions::compact()), "₹950.00");
        assert_eq!(format_inr(-130_000.0, FormatOptions::compact()), "-₹1,30,000.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_percentage(2.25, 1), "2.3%");
        assert_eq!(format_money(0.125), "₹0.13");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(0.0, 1), "0.0%");
        assert_eq!(format_percentage(50.0, 1), "50.0%");
        assert_eq!(format_percentage(-20.0, 1), "-20.0%");
        assert_eq!(format_percentage(18.4211, 2), "18.42%");
    }

    #[test]
    fn test_count() {
        assert_eq!(format_count(15), "15");
        assert_eq!(format_count(100000), "1,00,000");
    }

    #[test]
    fn test_parse_inr() {
        assert_eq!(parse_inr("₹1,30,000.00"), 130000.0);
        assert_eq!(parse_inr("₹2.5Cr"), 25_000_000.0);
        assert_eq!(parse_inr("1.3L"), 130_000.0);
        assert_eq!(parse_inr("₹ 50K"), 50_000.0);
        assert_eq!(parse_inr("-₹1,30,000.00"), -130000.0);
        assert_eq!(parse_inr("garbage"), 0.0);
    }

    #[test]
    fn test_growth() {
        assert_eq!(calculate_growth(450000.0, 0.0), 0.0);
        assert!((calculate_growth(450000.0, 380000.0) - 18.421).abs() < 0.001);
        assert!(calculate_growth(290000.0, 320000.0) < 0.0);
    }
}
