/// One fully composed outbound email. Source and recipients come from
/// configuration, never from the inbound payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub source: String,
    pub to_addresses: Vec<String>,
    pub subject: String,
    pub text_body: String,
}

/// Failure union at the send seam.
///
/// `Service` is the recognized service-client error category: the handler
/// catches it and translates it into a 500 response carrying the detail.
/// `Fault` is everything else (transport failures, request-building failures);
/// it propagates to the Lambda runtime as an unhandled invocation fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailSendError {
    Service { detail: String },
    Fault(String),
}

pub trait EmailSender {
    fn send(&self, outbound: &OutboundEmail) -> Result<(), EmailSendError>;
}
