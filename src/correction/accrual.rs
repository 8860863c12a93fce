use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CalculationError, Result};
use crate::types::CalculationMode;

/// how a monthly rate grows the principal over the whole span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccrualLaw {
    /// principal * (1 + r * n)
    Simple,
    /// principal * (1 + r)^n
    Compound,
}

impl AccrualLaw {
    pub fn for_mode(mode: CalculationMode) -> Self {
        match mode {
            CalculationMode::SimpleInterest => AccrualLaw::Simple,
            CalculationMode::CompoundInterest
            | CalculationMode::MonetaryCorrection
            | CalculationMode::LaborUpdate
            | CalculationMode::JudgmentLiquidation => AccrualLaw::Compound,
        }
    }

    /// corrected value after `months` periods
    pub fn accrue(&self, principal: Money, rate: Rate, months: u32) -> Result<Money> {
        match self {
            AccrualLaw::Simple => simple_accrual(principal, rate, months),
            AccrualLaw::Compound => compound_accrual(principal, rate, months),
        }
    }
}

/// (1 + r)^n by repeated multiplication
pub fn compound_factor(rate: Rate, months: u32) -> Result<Decimal> {
    let base = rate.growth_factor();
    let mut factor = Decimal::ONE;
    for _ in 0..months {
        factor = factor.checked_mul(base).ok_or_else(|| CalculationError::Overflow {
            context: format!("compound factor for {} months at {}", months, rate),
        })?;
    }
    Ok(factor)
}

pub fn compound_accrual(principal: Money, rate: Rate, months: u32) -> Result<Money> {
    let factor = compound_factor(rate, months)?;
    principal
        .checked_mul(factor)
        .ok_or_else(|| CalculationError::Overflow {
            context: format!("compounding {} over {} months", principal, months),
        })
}

pub fn simple_accrual(principal: Money, rate: Rate, months: u32) -> Result<Money> {
    let factor = rate
        .as_decimal()
        .checked_mul(Decimal::from(months))
        .and_then(|growth| growth.checked_add(Decimal::ONE))
        .ok_or_else(|| CalculationError::Overflow {
            context: format!("simple factor for {} months at {}", months, rate),
        })?;
    principal
        .checked_mul(factor)
        .ok_or_else(|| CalculationError::Overflow {
            context: format!("simple interest on {} over {} months", principal, months),
        })
}
