use num_format::{Locale, ToFormattedString};

pub const NOT_AVAILABLE: &str = "N/A";

/// Renders a USD amount as `$1,234,567.89`.
pub fn format_usd(value: f64) -> String {
    let rendered = format!("{:.2}", value.abs());
    let Some((integer, cents)) = rendered.split_once('.') else {
        return format!("${}", rendered);
    };
    let Ok(dollars) = integer.parse::<u128>() else {
        return format!("${}", rendered);
    };

    let sign = if value.is_sign_negative() && rendered != "0.00" {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, dollars.to_formatted_string(&Locale::en), cents)
}

/// Renders a percentage with two decimals, or `N/A` when absent.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v),
        _ => String::from(NOT_AVAILABLE),
    }
}

pub fn symbol_matches(symbol: &str, token: &str) -> bool {
    symbol.to_lowercase().contains(&token.to_lowercase())
}
