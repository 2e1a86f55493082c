use resume_api_core::contract::{CounterRecord, COUNTER_RECORD_KEY};
use serde_json::json;

use crate::adapters::counter_store::CounterStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterHandlerError {
    pub message: String,
}

/// Read-increment-write of the singleton page-view counter.
///
/// The sequence is deliberately not atomic: the record is read, incremented
/// in memory, and written back as a full overwrite. Concurrent invocations
/// can therefore lose updates (last write wins), matching the deployed
/// behavior. Any store failure, including an absent record, propagates as an
/// invocation fault with no retry and no fallback value.
pub fn handle_counter_event(store: &impl CounterStore) -> Result<u64, CounterHandlerError> {
    let record = store
        .get_record(COUNTER_RECORD_KEY)
        .map_err(|error| CounterHandlerError {
            message: format!("Failed to read counter record: {error}"),
        })?
        .ok_or_else(|| CounterHandlerError {
            message: format!("Counter record '{COUNTER_RECORD_KEY}' does not exist"),
        })?;

    let views = record.views + 1;
    log_counter_info("views_incremented", json!({ "views": views }));

    store
        .put_record(&CounterRecord::singleton(views))
        .map_err(|error| CounterHandlerError {
            message: format!("Failed to write counter record: {error}"),
        })?;

    Ok(views)
}

fn log_counter_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "counter_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    struct RecordingStore {
        records: Mutex<HashMap<String, CounterRecord>>,
        puts: Mutex<Vec<CounterRecord>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
                puts: Mutex::new(Vec::new()),
            }
        }

        fn seed(&self, record: CounterRecord) {
            self.records
                .lock()
                .expect("poisoned mutex")
                .insert(record.id.clone(), record);
        }

        fn stored(&self, key: &str) -> Option<CounterRecord> {
            self.records
                .lock()
                .expect("poisoned mutex")
                .get(key)
                .cloned()
        }

        fn puts(&self) -> Vec<CounterRecord> {
            self.puts.lock().expect("poisoned mutex").clone()
        }
    }

    impl CounterStore for RecordingStore {
        fn get_record(&self, key: &str) -> Result<Option<CounterRecord>, String> {
            Ok(self
                .records
                .lock()
                .expect("poisoned mutex")
                .get(key)
                .cloned())
        }

        fn put_record(&self, record: &CounterRecord) -> Result<(), String> {
            self.records
                .lock()
                .expect("poisoned mutex")
                .insert(record.id.clone(), record.clone());
            self.puts.lock().expect("poisoned mutex").push(record.clone());
            Ok(())
        }
    }

    struct UnavailableStore;

    impl CounterStore for UnavailableStore {
        fn get_record(&self, _key: &str) -> Result<Option<CounterRecord>, String> {
            Err("simulated store outage".to_string())
        }

        fn put_record(&self, _record: &CounterRecord) -> Result<(), String> {
            Err("simulated store outage".to_string())
        }
    }

    struct ReadOnlyStore {
        seeded: CounterRecord,
    }

    impl CounterStore for ReadOnlyStore {
        fn get_record(&self, _key: &str) -> Result<Option<CounterRecord>, String> {
            Ok(Some(self.seeded.clone()))
        }

        fn put_record(&self, _record: &CounterRecord) -> Result<(), String> {
            Err("simulated write rejection".to_string())
        }
    }

    #[test]
    fn increments_and_persists_the_singleton_record() {
        let store = RecordingStore::new();
        store.seed(CounterRecord::singleton(41));

        let views = handle_counter_event(&store).expect("counter should increment");

        assert_eq!(views, 42);
        assert_eq!(
            store.stored(COUNTER_RECORD_KEY),
            Some(CounterRecord::singleton(42))
        );
        assert_eq!(store.puts().len(), 1);
    }

    #[test]
    fn sequential_invocations_accumulate_exactly() {
        let store = RecordingStore::new();
        store.seed(CounterRecord::singleton(0));

        for expected in 1..=5 {
            let views = handle_counter_event(&store).expect("counter should increment");
            assert_eq!(views, expected);
        }

        assert_eq!(
            store.stored(COUNTER_RECORD_KEY),
            Some(CounterRecord::singleton(5))
        );
    }

    #[test]
    fn absent_record_is_fatal_and_writes_nothing() {
        let store = RecordingStore::new();

        let error = handle_counter_event(&store).expect_err("missing record should fail");

        assert!(error.message.contains("does not exist"));
        assert!(store.puts().is_empty());
    }

    #[test]
    fn store_read_failure_propagates() {
        let error =
            handle_counter_event(&UnavailableStore).expect_err("store outage should fail");
        assert!(error.message.contains("Failed to read counter record"));
    }

    #[test]
    fn store_write_failure_propagates() {
        let store = ReadOnlyStore {
            seeded: CounterRecord::singleton(10),
        };

        let error = handle_counter_event(&store).expect_err("rejected write should fail");

        assert!(error.message.contains("Failed to write counter record"));
        assert!(error.message.contains("simulated write rejection"));
    }
}
