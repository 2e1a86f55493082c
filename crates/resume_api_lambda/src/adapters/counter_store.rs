use resume_api_core::contract::CounterRecord;

pub trait CounterStore {
    fn get_record(&self, key: &str) -> Result<Option<CounterRecord>, String>;
    fn put_record(&self, record: &CounterRecord) -> Result<(), String>;
}
