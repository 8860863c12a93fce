use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{CalculationError, Result};

/// number of months shown in the monthly breakdown
pub const DEFAULT_BREAKDOWN_LIMIT: u32 = 12;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub rates: RateTable,
    #[serde(default = "default_breakdown_limit")]
    pub breakdown_limit: u32,
}

/// fixed monthly rate per correction index
///
/// These are static approximations, not the published monthly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    pub inpc: Rate,
    pub ipca: Rate,
    pub igpm: Rate,
    pub selic: Rate,
    pub tr: Rate,
    pub cdi: Rate,
    /// used for any index the table does not know
    pub fallback: Rate,
}

fn default_breakdown_limit() -> u32 {
    DEFAULT_BREAKDOWN_LIMIT
}

impl RateTable {
    /// the rates the office uses for its estimates
    pub fn standard() -> Self {
        Self {
            inpc: Rate::from_decimal(dec!(0.0041)),
            ipca: Rate::from_decimal(dec!(0.0045)),
            igpm: Rate::from_decimal(dec!(0.0050)),
            selic: Rate::from_decimal(dec!(0.0083)),
            tr: Rate::from_decimal(dec!(0.0010)),
            cdi: Rate::from_decimal(dec!(0.0080)),
            fallback: Rate::from_decimal(dec!(0.005)),
        }
    }

    fn entries(&self) -> [(&'static str, Rate); 7] {
        [
            ("INPC", self.inpc),
            ("IPCA", self.ipca),
            ("IGPM", self.igpm),
            ("SELIC", self.selic),
            ("TR", self.tr),
            ("CDI", self.cdi),
            ("fallback", self.fallback),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (index, rate) in self.entries() {
            if rate.is_negative() {
                return Err(CalculationError::InvalidRate {
                    index: index.to_string(),
                    rate,
                });
            }
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CalculatorConfig {
    /// standard rate table with a twelve month breakdown
    pub fn standard() -> Self {
        Self {
            rates: RateTable::standard(),
            breakdown_limit: DEFAULT_BREAKDOWN_LIMIT,
        }
    }

    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_breakdown_limit(mut self, months: u32) -> Self {
        self.breakdown_limit = months;
        self
    }

    /// load from json, missing fields take their standard values
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.rates.validate()?;
        if self.breakdown_limit == 0 {
            return Err(CalculationError::InvalidConfiguration {
                message: "breakdown_limit must be at least one month".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}
