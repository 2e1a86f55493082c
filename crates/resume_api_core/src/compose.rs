//! Deterministic rendering of the outbound contact email.

use crate::contract::ContactMessage;

pub const EMAIL_CHARSET: &str = "UTF-8";

pub fn subject_for(message: &ContactMessage) -> String {
    format!("New message from {}", message.name)
}

pub fn text_body_for(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nMessage:\n{}",
        message.name, message.email, message.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            message: "Hello, this is a test message.".to_string(),
        }
    }

    #[test]
    fn subject_embeds_the_sender_name() {
        assert_eq!(subject_for(&sample_message()), "New message from John Doe");
    }

    #[test]
    fn text_body_lists_all_three_fields() {
        assert_eq!(
            text_body_for(&sample_message()),
            "Name: John Doe\nEmail: johndoe@example.com\nMessage:\nHello, this is a test message."
        );
    }
}
