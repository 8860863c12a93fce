use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{CalculationId, CalculationMode};

/// events emitted by the calculation ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    CalculationRecorded {
        calculation_id: CalculationId,
        mode: CalculationMode,
        principal: Money,
        corrected_value: Money,
        timestamp: DateTime<Utc>,
    },
    CalculationLinked {
        calculation_id: CalculationId,
        process_number: String,
        previous_process: Option<String>,
        timestamp: DateTime<Utc>,
    },
    CalculationDeleted {
        calculation_id: CalculationId,
        timestamp: DateTime<Utc>,
    },
}

impl Event {
    pub fn calculation_id(&self) -> CalculationId {
        match self {
            Event::CalculationRecorded { calculation_id, .. }
            | Event::CalculationLinked { calculation_id, .. }
            | Event::CalculationDeleted { calculation_id, .. } => *calculation_id,
        }
    }
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn test_take_events_drains() {
        let id = Uuid::new_v4();
        let mut store = EventStore::new();
        store.emit(Event::CalculationDeleted {
            calculation_id: id,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        });

        assert_eq!(store.events().len(), 1);
        let events = store.take_events();
        assert_eq!(events[0].calculation_id(), id);
        assert!(store.events().is_empty());
    }
}
