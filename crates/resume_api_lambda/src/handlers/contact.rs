use resume_api_core::compose::{subject_for, text_body_for};
use resume_api_core::config::ContactConfig;
use resume_api_core::contract::{send_failure_message, ContactMessage, EMAIL_SENT_CONFIRMATION};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::adapters::email::{EmailSendError, EmailSender, OutboundEmail};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactHandlerError {
    pub message: String,
}

/// Relays one contact-form submission as an email.
///
/// Exactly one failure category produces a structured response: a recognized
/// service-client error from the send seam becomes a 500 carrying the
/// service's detail. Malformed events and transport faults return `Err` and
/// surface as unhandled invocation faults instead.
pub fn handle_contact_event(
    event: Value,
    config: &ContactConfig,
    sender: &dyn EmailSender,
) -> Result<ApiGatewayResponse, ContactHandlerError> {
    let message = parse_contact_event(event)?;

    let outbound = OutboundEmail {
        source: config.source_address.clone(),
        to_addresses: config.recipient_addresses.clone(),
        subject: subject_for(&message),
        text_body: text_body_for(&message),
    };

    match sender.send(&outbound) {
        Ok(()) => {
            log_contact_info("email_submitted", json!({ "subject": outbound.subject }));
            Ok(confirmation_response())
        }
        Err(EmailSendError::Service { detail }) => {
            log_contact_error("email_send_failed", json!({ "detail": detail.clone() }));
            Ok(send_failure_response(&detail))
        }
        Err(EmailSendError::Fault(message)) => Err(ContactHandlerError {
            message: format!("Failed to submit email: {message}"),
        }),
    }
}

fn parse_contact_event(event: Value) -> Result<ContactMessage, ContactHandlerError> {
    let Some(object) = event.as_object() else {
        return Err(ContactHandlerError {
            message: "Invocation event must be a JSON object".to_string(),
        });
    };

    let Some(body) = object.get("body") else {
        return Err(ContactHandlerError {
            message: "Invocation event is missing the body field".to_string(),
        });
    };

    let Value::String(text) = body else {
        return Err(ContactHandlerError {
            message: "Request body must be a JSON-encoded string".to_string(),
        });
    };

    serde_json::from_str(text).map_err(|error| ContactHandlerError {
        message: format!("Malformed contact payload: {error}"),
    })
}

fn confirmation_response() -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        body: serde_json::to_string(EMAIL_SENT_CONFIRMATION)
            .expect("confirmation message should serialize"),
    }
}

fn send_failure_response(detail: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 500,
        body: serde_json::to_string(&send_failure_message(detail))
            .expect("failure message should serialize"),
    }
}

fn log_contact_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "contact_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_contact_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "contact_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
