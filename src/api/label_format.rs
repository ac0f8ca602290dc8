use std::fmt;
use std::sync::Arc;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub type LabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Maximum fraction digits printed by [`LabelFormat::Default`].
pub const DEFAULT_FRACTION_DIGITS: u32 = 3;

/// Number formatting applied to axis tick labels.
#[derive(Clone, Default, Serialize, Deserialize)]
pub enum LabelFormat {
    /// Up to three fraction digits, trailing zeros trimmed, `,` grouping.
    #[default]
    Default,
    /// Exactly `precision` fraction digits, no grouping.
    FixedDecimals { precision: u8 },
    /// Host-provided formatter. Not serializable.
    #[serde(skip)]
    Custom(LabelFormatterFn),
}

impl LabelFormat {
    #[must_use]
    pub fn custom(formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(formatter))
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return match self {
                Self::Custom(formatter) => formatter(value),
                _ => value.to_string(),
            };
        }

        match self {
            Self::Default => format_general(value),
            Self::FixedDecimals { precision } => format_fixed(value, *precision),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl fmt::Debug for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::FixedDecimals { precision } => f
                .debug_struct("FixedDecimals")
                .field("precision", precision)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

impl PartialEq for LabelFormat {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Default, Self::Default) => true,
            (Self::FixedDecimals { precision: a }, Self::FixedDecimals { precision: b }) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn format_general(value: f64) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return value.to_string();
    };
    let rounded = decimal
        .round_dp_with_strategy(DEFAULT_FRACTION_DIGITS, RoundingStrategy::MidpointNearestEven)
        .normalize();
    group_thousands(&rounded.to_string())
}

fn format_fixed(value: f64, precision: u8) -> String {
    let precision = usize::from(precision);
    let Some(decimal) = Decimal::from_f64(value) else {
        return format!("{value:.precision$}");
    };
    let rounded = decimal
        .round_dp_with_strategy(precision as u32, RoundingStrategy::MidpointNearestEven)
        .normalize();
    format!("{rounded:.precision$}")
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_digits() {
        assert_eq!(group_thousands("1234567.5"), "1,234,567.5");
        assert_eq!(group_thousands("-1000"), "-1,000");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn custom_formats_compare_by_identity() {
        let format = LabelFormat::custom(|value| format!("{value}%"));
        assert_eq!(format, format.clone());
        assert_ne!(format, LabelFormat::custom(|value| format!("{value}%")));
    }
}
