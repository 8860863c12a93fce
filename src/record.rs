use chrono::{DateTime, NaiveDate, Utc};
use hourglass_rs::{SafeTimeProvider, TimeSource};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::correction::{CalculationInput, CalculationResult, Calculator};
use crate::decimal::Money;
use crate::errors::{CalculationError, Result};
use crate::format::{format_brl, format_percentage, format_rate};
use crate::types::{parse_date, CalculationId, CalculationMode, CorrectionIndex};

/// a titled calculation as kept by the office, optionally tied to a lawsuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: CalculationId,
    pub title: String,
    pub mode: CalculationMode,
    pub index: CorrectionIndex,
    pub principal: Money,
    pub final_value: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// lawsuit number, e.g. "1000001-00.2024.8.00.0000"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub result: CalculationResult,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn input(&self) -> CalculationInput {
        CalculationInput::new(
            self.mode,
            self.principal,
            self.start_date,
            self.end_date,
            self.index.clone(),
        )
    }

    pub fn is_linked(&self) -> bool {
        self.linked_process.is_some()
    }

    /// case-insensitive match on title, mode label or linked process
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.mode.label().to_lowercase().contains(&needle)
            || self
                .linked_process
                .as_deref()
                .map(|p| p.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }

    /// human-readable summary lines
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("{} ({})", self.title, self.mode),
            format!("Valor inicial: {}", format_brl(self.principal)),
            format!("Valor corrigido: {}", format_brl(self.final_value)),
            format!(
                "Correção: {} ({})",
                format_percentage(self.result.percentage_change, 2),
                format_brl(self.result.absolute_difference)
            ),
            format!(
                "Índice: {} a {} ao mês, {} meses",
                self.index.label(),
                format_rate(self.result.monthly_rate),
                self.result.elapsed_months
            ),
        ]
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// alias for to_json_pretty
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// builder for calculation records
#[derive(Debug, Default)]
pub struct CalculationBuilder {
    title: Option<String>,
    mode: Option<CalculationMode>,
    index: Option<CorrectionIndex>,
    principal: Option<Money>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    linked_process: Option<String>,
    notes: Option<String>,
    calculator: Option<Calculator>,
}

impl CalculationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn mode(mut self, mode: CalculationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// mode from its label or name, e.g. "Juros Compostos"
    pub fn mode_str(mut self, mode: &str) -> Result<Self> {
        self.mode = Some(mode.parse()?);
        Ok(self)
    }

    pub fn index(mut self, index: impl Into<CorrectionIndex>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn start_date_str(mut self, date: &str) -> Result<Self> {
        self.start_date = Some(parse_date(date)?);
        Ok(self)
    }

    /// defaults to today when not set
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn end_date_str(mut self, date: &str) -> Result<Self> {
        self.end_date = Some(parse_date(date)?);
        Ok(self)
    }

    pub fn linked_process(mut self, process_number: impl Into<String>) -> Self {
        self.linked_process = Some(process_number.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn calculator(mut self, calculator: Calculator) -> Self {
        self.calculator = Some(calculator);
        self
    }

    /// build with system time
    pub fn build(self) -> Result<CalculationRecord> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.build_with_time(&time)
    }

    /// build with explicit time provider
    pub fn build_with_time(self, time_provider: &SafeTimeProvider) -> Result<CalculationRecord> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(CalculationError::MissingField { field: "title" })?;
        let mode = self.mode.ok_or(CalculationError::MissingField { field: "mode" })?;
        let index = self.index.ok_or(CalculationError::MissingField { field: "index" })?;
        let principal = self
            .principal
            .ok_or(CalculationError::MissingField { field: "principal" })?;
        let start_date = self
            .start_date
            .ok_or(CalculationError::MissingField { field: "start_date" })?;

        let now = time_provider.now();
        let end_date = self.end_date.unwrap_or_else(|| now.date_naive());

        let input = CalculationInput::new(mode, principal, start_date, end_date, index);
        let result = self.calculator.unwrap_or_default().compute(&input)?;

        Ok(CalculationRecord {
            id: Uuid::new_v4(),
            title,
            mode: input.mode,
            index: input.index,
            principal,
            final_value: result.corrected_value,
            start_date,
            end_date,
            linked_process: self.linked_process.filter(|p| !p.trim().is_empty()),
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            result,
            created_at: now,
            updated_at: now,
        })
    }
}
