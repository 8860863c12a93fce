use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{CalculationError, Result};

/// unique identifier for a stored calculation
pub type CalculationId = Uuid;

/// legal calculation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// inflation-indexed correction, compounded monthly
    MonetaryCorrection,
    /// compound interest
    CompoundInterest,
    /// linear interest on the original principal
    SimpleInterest,
    /// labor-court debt update, compounded monthly
    LaborUpdate,
    /// judgment liquidation, compounded monthly
    JudgmentLiquidation,
}

impl CalculationMode {
    pub const ALL: [CalculationMode; 5] = [
        CalculationMode::MonetaryCorrection,
        CalculationMode::CompoundInterest,
        CalculationMode::SimpleInterest,
        CalculationMode::LaborUpdate,
        CalculationMode::JudgmentLiquidation,
    ];

    /// label used in court filings and on screen
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMode::MonetaryCorrection => "Correção Monetária",
            CalculationMode::CompoundInterest => "Juros Compostos",
            CalculationMode::SimpleInterest => "Juros Simples",
            CalculationMode::LaborUpdate => "Atualização Trabalhista",
            CalculationMode::JudgmentLiquidation => "Liquidação de Sentença",
        }
    }

    /// true for the two interest categories
    pub fn is_interest(&self) -> bool {
        matches!(
            self,
            CalculationMode::CompoundInterest | CalculationMode::SimpleInterest
        )
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            CalculationMode::MonetaryCorrection => {
                &["correção monetária", "correcao monetaria", "monetary_correction"]
            }
            CalculationMode::CompoundInterest => &["juros compostos", "compound_interest"],
            CalculationMode::SimpleInterest => &["juros simples", "simple_interest"],
            CalculationMode::LaborUpdate => {
                &["atualização trabalhista", "atualizacao trabalhista", "labor_update"]
            }
            CalculationMode::JudgmentLiquidation => &[
                "liquidação de sentença",
                "liquidacao de sentenca",
                "judgment_liquidation",
            ],
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalculationMode {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        CalculationMode::ALL
            .into_iter()
            .find(|mode| mode.aliases().contains(&needle.as_str()))
            .ok_or_else(|| CalculationError::UnknownMode {
                value: s.to_string(),
            })
    }
}

/// correction index, each bound to a fixed monthly rate
///
/// Any code outside the known six parses to `Other` so it can still reach
/// the rate resolver, which substitutes the fallback rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CorrectionIndex {
    Inpc,
    Ipca,
    Igpm,
    Selic,
    Tr,
    Cdi,
    Other(String),
}

impl CorrectionIndex {
    /// stored code, e.g. "IGPM"
    pub fn code(&self) -> &str {
        match self {
            CorrectionIndex::Inpc => "INPC",
            CorrectionIndex::Ipca => "IPCA",
            CorrectionIndex::Igpm => "IGPM",
            CorrectionIndex::Selic => "SELIC",
            CorrectionIndex::Tr => "TR",
            CorrectionIndex::Cdi => "CDI",
            CorrectionIndex::Other(code) => code,
        }
    }

    /// display name, e.g. "IGP-M"
    pub fn label(&self) -> &str {
        match self {
            CorrectionIndex::Igpm => "IGP-M",
            other => other.code(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CorrectionIndex::Other(_))
    }
}

impl fmt::Display for CorrectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CorrectionIndex {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_uppercase();

        Ok(match normalized.as_str() {
            "INPC" => CorrectionIndex::Inpc,
            "IPCA" => CorrectionIndex::Ipca,
            "IGPM" => CorrectionIndex::Igpm,
            "SELIC" => CorrectionIndex::Selic,
            "TR" => CorrectionIndex::Tr,
            "CDI" => CorrectionIndex::Cdi,
            _ => CorrectionIndex::Other(s.trim().to_string()),
        })
    }
}

impl From<String> for CorrectionIndex {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(index) => index,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for CorrectionIndex {
    fn from(s: &str) -> Self {
        CorrectionIndex::from(s.to_string())
    }
}

impl From<CorrectionIndex> for String {
    fn from(index: CorrectionIndex) -> Self {
        index.code().to_string()
    }
}

/// parse a calendar date from `YYYY-MM-DD` or a full RFC 3339 timestamp
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| CalculationError::InvalidDate {
            message: format!("cannot parse '{}' as a date", s),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_labels_and_names() {
        assert_eq!(
            "Juros Simples".parse::<CalculationMode>().unwrap(),
            CalculationMode::SimpleInterest
        );
        assert_eq!(
            "correcao monetaria".parse::<CalculationMode>().unwrap(),
            CalculationMode::MonetaryCorrection
        );
        assert_eq!(
            "judgment_liquidation".parse::<CalculationMode>().unwrap(),
            CalculationMode::JudgmentLiquidation
        );
        for mode in CalculationMode::ALL {
            assert_eq!(mode.label().parse::<CalculationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "Juros Sobre Juros".parse::<CalculationMode>().unwrap_err();
        assert!(matches!(err, CalculationError::UnknownMode { .. }));
    }

    #[test]
    fn test_index_parsing_never_fails() {
        assert_eq!(CorrectionIndex::from("igp-m"), CorrectionIndex::Igpm);
        assert_eq!(CorrectionIndex::from(" selic "), CorrectionIndex::Selic);
        assert_eq!(
            CorrectionIndex::from("TJLP"),
            CorrectionIndex::Other("TJLP".to_string())
        );
        assert!(!CorrectionIndex::from("TJLP").is_known());
    }

    #[test]
    fn test_index_serializes_as_code() {
        let json = serde_json::to_string(&CorrectionIndex::Igpm).unwrap();
        assert_eq!(json, "\"IGPM\"");
        let back: CorrectionIndex = serde_json::from_str("\"IGP-M\"").unwrap();
        assert_eq!(back, CorrectionIndex::Igpm);
        assert_eq!(CorrectionIndex::Igpm.label(), "IGP-M");
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(parse_date("2024-01-31").unwrap(), expected);
        assert_eq!(parse_date("2024-01-31T10:00:00Z").unwrap(), expected);
        assert!(matches!(
            parse_date("31/01/2024"),
            Err(CalculationError::InvalidDate { .. })
        ));
    }
}
