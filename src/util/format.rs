//! Display formatting for the result tables and cards. Two decimals for
//! money, whole percents for occupancy, and the minus sign ahead of the
//! currency symbol so losses read naturally.

/// `1234.5` → `"$1,234.50"`, `-7025.07` → `"-$7,025.07"`.
pub fn dollars(value: f64) -> String {
    currency("$", value)
}

/// The lemonade panel prices in bolívares, as the worksheet does.
pub fn bolivares(value: f64) -> String {
    currency("Bs ", value)
}

pub fn currency(symbol: &str, value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{}", group_thousands(value.abs()))
}

/// `0.85` → `"85%"`.
pub fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Whole-number counts with thousands separators: `182499` → `"182,499"`.
pub fn count(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let grouped = insert_separators(&digits);
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}.{cents}", insert_separators(whole))
}

fn insert_separators(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_groups_and_keeps_two_decimals() {
        assert_eq!(dollars(0.0), "$0.00");
        assert_eq!(dollars(18_249.9), "$18,249.90");
        assert_eq!(dollars(20_668_000.0), "$20,668,000.00");
    }

    #[test]
    fn losses_put_the_sign_before_the_symbol() {
        assert_eq!(dollars(-7_025.07), "-$7,025.07");
        assert_eq!(bolivares(-0.2), "-Bs 0.20");
    }

    #[test]
    fn percent_rounds_to_whole_points() {
        assert_eq!(percent(0.60), "60%");
        assert_eq!(percent(1.0), "100%");
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(count(167.0), "167");
        assert_eq!(count(282_857.142857), "282,857");
        assert_eq!(count(-1_234.0), "-1,234");
    }
}
