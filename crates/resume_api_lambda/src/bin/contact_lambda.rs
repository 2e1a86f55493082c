use aws_sdk_ses::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use resume_api_core::compose::EMAIL_CHARSET;
use resume_api_core::config::ContactConfig;
use resume_api_lambda::adapters::email::{EmailSendError, EmailSender, OutboundEmail};
use resume_api_lambda::handlers::contact::{handle_contact_event, ApiGatewayResponse};
use serde_json::Value;

struct SesEmailSender {
    ses_client: aws_sdk_ses::Client,
}

impl EmailSender for SesEmailSender {
    fn send(&self, outbound: &OutboundEmail) -> Result<(), EmailSendError> {
        let client = self.ses_client.clone();
        let outbound = outbound.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let subject = utf8_content(outbound.subject)?;
                let text = utf8_content(outbound.text_body)?;
                let message = Message::builder()
                    .subject(subject)
                    .body(Body::builder().text(text).build())
                    .build();
                let destination = Destination::builder()
                    .set_to_addresses(Some(outbound.to_addresses))
                    .build();

                match client
                    .send_email()
                    .source(outbound.source)
                    .destination(destination)
                    .message(message)
                    .send()
                    .await
                {
                    Ok(_) => Ok(()),
                    Err(error) if matches!(error, SdkError::ServiceError(_)) => {
                        let detail = error
                            .into_service_error()
                            .message()
                            .map(str::to_string)
                            .unwrap_or_else(|| "unknown service error".to_string());
                        Err(EmailSendError::Service { detail })
                    }
                    Err(error) => Err(EmailSendError::Fault(format!(
                        "failed to reach ses: {error}"
                    ))),
                }
            })
        })
    }
}

fn utf8_content(data: String) -> Result<Content, EmailSendError> {
    Content::builder()
        .data(data)
        .charset(EMAIL_CHARSET)
        .build()
        .map_err(|error| EmailSendError::Fault(format!("failed to build email content: {error}")))
}

fn contact_config_from_env() -> ContactConfig {
    let defaults = ContactConfig::default();
    ContactConfig {
        region: std::env::var("CONTACT_SES_REGION").unwrap_or(defaults.region),
        source_address: std::env::var("CONTACT_SOURCE_ADDRESS").unwrap_or(defaults.source_address),
        recipient_addresses: std::env::var("CONTACT_RECIPIENT_ADDRESSES")
            .map(|value| parse_recipient_addresses(&value))
            .unwrap_or(defaults.recipient_addresses),
    }
}

fn parse_recipient_addresses(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    let config = contact_config_from_env();
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await;

    let sender = SesEmailSender {
        ses_client: aws_sdk_ses::Client::new(&aws_config),
    };

    handle_contact_event(event.payload, &config, &sender)
        .map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
