use crate::config::RateTable;
use crate::decimal::Rate;
use crate::types::CorrectionIndex;

/// resolve the fixed monthly rate for an index
///
/// Unknown indices get `table.fallback` instead of an error.
pub fn resolve_monthly_rate(table: &RateTable, index: &CorrectionIndex) -> Rate {
    match index {
        CorrectionIndex::Inpc => table.inpc,
        CorrectionIndex::Ipca => table.ipca,
        CorrectionIndex::Igpm => table.igpm,
        CorrectionIndex::Selic => table.selic,
        CorrectionIndex::Tr => table.tr,
        CorrectionIndex::Cdi => table.cdi,
        CorrectionIndex::Other(code) => {
            tracing::warn!(
                index = %code,
                fallback_rate = %table.fallback,
                "unrecognized correction index, using fallback rate"
            );
            table.fallback
        }
    }
}
