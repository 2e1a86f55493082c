use serde::{Deserialize, Serialize};

/// Fixed identifier of the one persisted counter record.
pub const COUNTER_RECORD_KEY: &str = "1";

pub const EMAIL_SENT_CONFIRMATION: &str = "Email sent successfully!";

/// The persisted page-view counter. Exactly one record exists, addressed by
/// [`COUNTER_RECORD_KEY`]; `views` only ever moves forward under single-writer
/// usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterRecord {
    pub id: String,
    pub views: u64,
}

impl CounterRecord {
    pub fn singleton(views: u64) -> Self {
        Self {
            id: COUNTER_RECORD_KEY.to_string(),
            views,
        }
    }
}

/// One contact-form submission. All three fields are required; a payload
/// missing any of them must fail to deserialize rather than default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn send_failure_message(detail: &str) -> String {
    format!("Failed to send email: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_record_uses_the_fixed_key() {
        let record = CounterRecord::singleton(7);
        assert_eq!(record.id, "1");
        assert_eq!(record.views, 7);
    }

    #[test]
    fn counter_record_round_trips_through_json() {
        let record = CounterRecord::singleton(42);
        let encoded = serde_json::to_string(&record).expect("record should serialize");
        let decoded: CounterRecord =
            serde_json::from_str(&encoded).expect("record should deserialize");
        assert_eq!(decoded, record);
    }

    #[test]
    fn contact_message_requires_every_field() {
        let error = serde_json::from_str::<ContactMessage>(
            "{\"name\":\"John Doe\",\"email\":\"johndoe@example.com\"}",
        )
        .expect_err("missing message field should fail to parse");
        assert!(error.to_string().contains("message"));
    }

    #[test]
    fn contact_message_tolerates_unknown_fields() {
        let message: ContactMessage = serde_json::from_str(
            "{\"name\":\"a\",\"email\":\"b\",\"message\":\"c\",\"extra\":true}",
        )
        .expect("unknown fields should be ignored");
        assert_eq!(message.name, "a");
    }

    #[test]
    fn failure_message_embeds_the_service_detail() {
        assert_eq!(
            send_failure_message("Mock error message"),
            "Failed to send email: Mock error message"
        );
    }
}
