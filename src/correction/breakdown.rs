use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_BREAKDOWN_LIMIT;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculationError, Result};

/// one month of the displayed accrual trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreakdownEntry {
    /// 1-based
    pub month_index: u32,
    pub value_before: Money,
    pub rate_applied: Rate,
    pub monthly_accrual: Money,
    pub value_after: Money,
}

/// month-by-month trace for the first `min(months, limit)` months
///
/// The trace always compounds, even when the headline value was computed
/// with simple interest.
pub fn generate_breakdown(
    principal: Money,
    rate: Rate,
    months: u32,
    limit: u32,
) -> Result<Vec<MonthlyBreakdownEntry>> {
    let shown = months.min(limit);
    let growth = rate.growth_factor();
    let mut entries = Vec::with_capacity(shown.min(DEFAULT_BREAKDOWN_LIMIT) as usize);
    let mut current = principal;

    for month_index in 1..=shown {
        let value_before = current;
        let value_after = value_before
            .checked_mul(growth)
            .ok_or_else(|| CalculationError::Overflow {
                context: format!("breakdown month {}", month_index),
            })?;
        entries.push(MonthlyBreakdownEntry {
            month_index,
            value_before,
            rate_applied: rate,
            monthly_accrual: value_after - value_before,
            value_after,
        });
        current = value_after;
    }

    Ok(entries)
}
