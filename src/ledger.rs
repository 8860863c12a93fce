use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculationError, Result};
use crate::events::{Event, EventStore};
use crate::record::CalculationRecord;
use crate::types::{CalculationId, CalculationMode};

/// counters shown above the calculation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total: usize,
    pub monetary_corrections: usize,
    /// simple plus compound interest
    pub interest: usize,
    pub linked: usize,
}

/// in-memory collection of calculations, newest first
#[derive(Debug, Default)]
pub struct CalculationLedger {
    records: Vec<CalculationRecord>,
    events: EventStore,
}

impl CalculationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// add a computed calculation
    pub fn record(&mut self, record: CalculationRecord) -> CalculationId {
        let id = record.id;
        tracing::info!(calculation_id = %id, mode = %record.mode, "calculation recorded");
        self.events.emit(Event::CalculationRecorded {
            calculation_id: id,
            mode: record.mode,
            principal: record.principal,
            corrected_value: record.final_value,
            timestamp: record.created_at,
        });

        let position = self
            .records
            .iter()
            .position(|r| r.created_at <= record.created_at)
            .unwrap_or(self.records.len());
        self.records.insert(position, record);
        id
    }

    pub fn get(&self, id: CalculationId) -> Option<&CalculationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn remove(
        &mut self,
        id: CalculationId,
        time_provider: &SafeTimeProvider,
    ) -> Result<CalculationRecord> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CalculationError::CalculationNotFound { id })?;
        let removed = self.records.remove(position);

        tracing::info!(calculation_id = %id, "calculation deleted");
        self.events.emit(Event::CalculationDeleted {
            calculation_id: id,
            timestamp: time_provider.now(),
        });
        Ok(removed)
    }

    /// attach a calculation to a lawsuit, replacing any previous link
    pub fn link_to_process(
        &mut self,
        id: CalculationId,
        process_number: &str,
        time_provider: &SafeTimeProvider,
    ) -> Result<&CalculationRecord> {
        let process_number = process_number.trim();
        if process_number.is_empty() {
            return Err(CalculationError::MissingField {
                field: "process_number",
            });
        }

        let now = time_provider.now();
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CalculationError::CalculationNotFound { id })?;

        let previous_process = record.linked_process.replace(process_number.to_string());
        record.updated_at = now;

        tracing::info!(calculation_id = %id, process = %process_number, "calculation linked");
        self.events.emit(Event::CalculationLinked {
            calculation_id: id,
            process_number: process_number.to_string(),
            previous_process,
            timestamp: now,
        });
        Ok(record)
    }

    /// case-insensitive search over title, mode and linked process
    pub fn search(&self, term: &str) -> Vec<&CalculationRecord> {
        self.records.iter().filter(|r| r.matches(term)).collect()
    }

    pub fn by_mode(&self, mode: CalculationMode) -> Vec<&CalculationRecord> {
        self.records.iter().filter(|r| r.mode == mode).collect()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.records.iter().fold(
            LedgerSummary {
                total: self.records.len(),
                ..LedgerSummary::default()
            },
            |mut acc, r| {
                if r.mode == CalculationMode::MonetaryCorrection {
                    acc.monetary_corrections += 1;
                }
                if r.mode.is_interest() {
                    acc.interest += 1;
                }
                if r.is_linked() {
                    acc.linked += 1;
                }
                acc
            },
        )
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::record::CalculationBuilder;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use pretty_assertions::assert_eq;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap(),
        ))
    }

    fn build(title: &str, mode: CalculationMode, time: &SafeTimeProvider) -> CalculationRecord {
        CalculationBuilder::new()
            .title(title)
            .mode(mode)
            .index("IPCA")
            .principal(Money::from_major(1_000))
            .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .build_with_time(time)
            .unwrap()
    }

    fn populated() -> (CalculationLedger, SafeTimeProvider) {
        let time = test_time();
        let control = time.test_control().unwrap();
        let mut ledger = CalculationLedger::new();

        ledger.record(build("Correção aluguel", CalculationMode::MonetaryCorrection, &time));
        control.advance(Duration::minutes(5));
        ledger.record(build("Juros contrato", CalculationMode::CompoundInterest, &time));
        control.advance(Duration::minutes(5));
        ledger.record(build("Juros mora", CalculationMode::SimpleInterest, &time));
        control.advance(Duration::minutes(5));
        ledger.record(build("Rescisão", CalculationMode::LaborUpdate, &time));

        (ledger, time)
    }

    #[test]
    fn test_records_are_newest_first() {
        let (ledger, _) = populated();
        let titles: Vec<&str> = ledger.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Rescisão", "Juros mora", "Juros contrato", "Correção aluguel"]
        );
    }

    #[test]
    fn test_search() {
        let (ledger, _) = populated();
        assert_eq!(ledger.search("juros").len(), 2);
        assert_eq!(ledger.search("TRABALHISTA").len(), 1);
        assert_eq!(ledger.search("").len(), 4);
        assert!(ledger.search("inexistente").is_empty());
    }

    #[test]
    fn test_summary_counters() {
        let (mut ledger, time) = populated();
        let id = ledger.records()[0].id;
        ledger
            .link_to_process(id, "1000003-00.2024.8.00.0002", &time)
            .unwrap();

        assert_eq!(
            ledger.summary(),
            LedgerSummary {
                total: 4,
                monetary_corrections: 1,
                interest: 2,
                linked: 1,
            }
        );
    }

    #[test]
    fn test_link_updates_record_and_emits() {
        let (mut ledger, time) = populated();
        ledger.take_events();
        let id = ledger.records()[1].id;

        ledger.link_to_process(id, "1000001-00.2024.8.00.0000", &time).unwrap();
        let record = ledger
            .link_to_process(id, "1000002-00.2024.8.00.0001", &time)
            .unwrap();

        assert_eq!(record.linked_process.as_deref(), Some("1000002-00.2024.8.00.0001"));
        assert!(record.updated_at > record.created_at);
        assert_eq!(ledger.search("8.00.0001").len(), 1);

        let events = ledger.take_events();
        assert_eq!(events.len(), 2);
        match &events[1] {
            Event::CalculationLinked { previous_process, .. } => {
                assert_eq!(previous_process.as_deref(), Some("1000001-00.2024.8.00.0000"));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_link_requires_process_number() {
        let (mut ledger, time) = populated();
        let id = ledger.records()[0].id;
        let err = ledger.link_to_process(id, " ", &time).unwrap_err();
        assert!(matches!(err, CalculationError::MissingField { .. }));
    }

    #[test]
    fn test_remove() {
        let (mut ledger, time) = populated();
        let id = ledger.records()[2].id;

        let removed = ledger.remove(id, &time).unwrap();
        assert_eq!(removed.title, "Juros contrato");
        assert_eq!(ledger.len(), 3);
        assert!(ledger.get(id).is_none());
        assert!(matches!(
            ledger.events().last(),
            Some(Event::CalculationDeleted { calculation_id, .. }) if *calculation_id == id
        ));

        let err = ledger.remove(id, &time).unwrap_err();
        assert!(matches!(err, CalculationError::CalculationNotFound { .. }));
    }

    #[test]
    fn test_by_mode() {
        let (ledger, _) = populated();
        assert_eq!(ledger.by_mode(CalculationMode::SimpleInterest).len(), 1);
        assert!(ledger.by_mode(CalculationMode::JudgmentLiquidation).is_empty());
    }
}
