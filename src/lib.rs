pub mod config;
pub mod correction;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod format;
pub mod ledger;
pub mod record;
pub mod types;

// re-export key types
pub use config::{CalculatorConfig, RateTable};
pub use correction::{
    compute, AccrualLaw, CalculationInput, CalculationResult, Calculator, MonthlyBreakdownEntry,
};
pub use decimal::{Money, Rate};
pub use errors::{CalculationError, Result};
pub use events::{Event, EventStore};
pub use format::{format_brl, format_percentage, format_rate};
pub use ledger::{CalculationLedger, LedgerSummary};
pub use record::{CalculationBuilder, CalculationRecord};
pub use types::{parse_date, CalculationId, CalculationMode, CorrectionIndex};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
