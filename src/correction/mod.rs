pub mod accrual;
pub mod breakdown;
pub mod period;
pub mod rates;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculationError, Result};
use crate::types::{CalculationMode, CorrectionIndex};

pub use accrual::{compound_accrual, compound_factor, simple_accrual, AccrualLaw};
pub use breakdown::{generate_breakdown, MonthlyBreakdownEntry};
pub use period::elapsed_months;
pub use rates::resolve_monthly_rate;

/// parameters of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub mode: CalculationMode,
    pub principal: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub index: CorrectionIndex,
}

impl CalculationInput {
    pub fn new(
        mode: CalculationMode,
        principal: Money,
        start_date: NaiveDate,
        end_date: NaiveDate,
        index: impl Into<CorrectionIndex>,
    ) -> Self {
        Self {
            mode,
            principal,
            start_date,
            end_date,
            index: index.into(),
        }
    }
}

/// outcome of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub corrected_value: Money,
    /// (corrected - principal) / principal * 100, zero when principal is zero
    pub percentage_change: Decimal,
    pub absolute_difference: Money,
    pub elapsed_months: u32,
    pub monthly_rate: Rate,
    pub monthly_breakdown: Vec<MonthlyBreakdownEntry>,
}

/// monetary correction and interest calculator
///
/// Stateless apart from its configuration; one instance can serve any
/// number of callers.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn monthly_rate(&self, index: &CorrectionIndex) -> Rate {
        resolve_monthly_rate(&self.config.rates, index)
    }

    /// run a calculation
    ///
    /// Zero principals, reversed date ranges and unknown indices all yield a
    /// result. Errors are limited to a negative principal and decimal overflow.
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationResult> {
        if input.principal.is_negative() {
            return Err(CalculationError::InvalidPrincipal {
                amount: input.principal,
            });
        }

        let months = elapsed_months(input.start_date, input.end_date);
        let monthly_rate = self.monthly_rate(&input.index);
        let law = AccrualLaw::for_mode(input.mode);

        let corrected_value = law.accrue(input.principal, monthly_rate, months)?;
        let absolute_difference = corrected_value - input.principal;
        let percentage_change = percentage_change(input.principal, corrected_value)?;
        let monthly_breakdown = generate_breakdown(
            input.principal,
            monthly_rate,
            months,
            self.config.breakdown_limit,
        )?;

        tracing::debug!(
            mode = %input.mode,
            index = %input.index,
            months,
            rate = %monthly_rate,
            principal = %input.principal,
            corrected = %corrected_value,
            "calculation computed"
        );

        Ok(CalculationResult {
            corrected_value,
            percentage_change,
            absolute_difference,
            elapsed_months: months,
            monthly_rate,
            monthly_breakdown,
        })
    }
}

/// compute with the standard rate table
pub fn compute(input: &CalculationInput) -> Result<CalculationResult> {
    Calculator::default().compute(input)
}

fn percentage_change(principal: Money, corrected: Money) -> Result<Decimal> {
    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }
    (corrected - principal)
        .as_decimal()
        .checked_div(principal.as_decimal())
        .and_then(|ratio| ratio.checked_mul(Decimal::from(100)))
        .ok_or_else(|| CalculationError::Overflow {
            context: format!("percentage change from {} to {}", principal, corrected),
        })
}
