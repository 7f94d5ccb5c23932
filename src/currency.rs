//! Display currencies and static exchange rates
//!
//! The engine works in AED. Conversion is applied only when figures are
//! presented or exported.

use crate::error::ModelError;
use crate::round_half_up;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Aed,
    Usd,
    Eur,
}

impl Currency {
    /// Units of this currency per 1 AED
    pub fn rate(self) -> f64 {
        match self {
            Currency::Aed => 1.0,
            Currency::Usd => 0.272,
            Currency::Eur => 0.249,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Aed => "AED",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Convert an amount in `from` into this currency
    pub fn convert_from(self, amount: f64, from: Currency) -> f64 {
        if from == self {
            return amount;
        }
        let aed = amount / from.rate();
        aed * self.rate()
    }

    /// Convert an AED amount into this currency
    pub fn from_aed(self, amount: f64) -> f64 {
        self.convert_from(amount, Currency::Aed)
    }

    /// Format a whole-unit amount already in this currency
    ///
    /// `1234567.4` in USD renders as `$1,234,567`; AED carries a suffix
    /// instead of a symbol.
    pub fn format(self, amount: f64) -> String {
        let grouped = group_thousands(round_half_up(amount));
        match self {
            Currency::Aed => format!("{} AED", grouped),
            Currency::Usd => format!("${}", grouped),
            Currency::Eur => format!("€{}", grouped),
        }
    }

    /// Convert from AED and format
    pub fn format_aed(self, amount: f64) -> String {
        self.format(self.from_aed(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AED" => Ok(Currency::Aed),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(ModelError::UnknownCurrency(s.to_string())),
        }
    }
}

fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversion_through_aed() {
        assert_eq!(Currency::Aed.from_aed(1000.0), 1000.0);
        assert_relative_eq!(Currency::Usd.from_aed(1000.0), 272.0, epsilon = 1e-9);
        assert_relative_eq!(Currency::Eur.from_aed(1000.0), 249.0, epsilon = 1e-9);

        // USD -> AED -> EUR
        assert_relative_eq!(
            Currency::Eur.convert_from(272.0, Currency::Usd),
            249.0,
            epsilon = 1e-9
        );
        assert_eq!(Currency::Usd.convert_from(42.0, Currency::Usd), 42.0);
    }

    #[test]
    fn test_format() {
        assert_eq!(Currency::Aed.format(1_234_567.4), "1,234,567 AED");
        assert_eq!(Currency::Usd.format(999.5), "$1,000");
        assert_eq!(Currency::Eur.format(12.0), "€12");
        assert_eq!(Currency::Usd.format(-169_900.0), "$-169,900");
        assert_eq!(Currency::Aed.format(0.0), "0 AED");
        assert_eq!(Currency::Usd.format_aed(1000.0), "$272");
    }

    #[test]
    fn test_parse() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);
        assert!(matches!(
            "GBP".parse::<Currency>(),
            Err(ModelError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Currency::Aed).unwrap(), "\"AED\"");
        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::Eur);
    }
}
