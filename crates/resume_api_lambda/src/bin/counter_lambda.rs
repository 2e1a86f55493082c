use aws_sdk_dynamodb::types::AttributeValue;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use resume_api_core::config::CounterConfig;
use resume_api_core::contract::{CounterRecord, COUNTER_RECORD_KEY};
use resume_api_lambda::adapters::counter_store::CounterStore;
use resume_api_lambda::handlers::counter::handle_counter_event;
use serde_json::Value;

struct DynamoDbCounterStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl CounterStore for DynamoDbCounterStore {
    fn get_record(&self, key: &str) -> Result<Option<CounterRecord>, String> {
        let client = self.dynamodb_client.clone();
        let table_name = self.table_name.clone();
        let record_key = key.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_item()
                    .table_name(table_name)
                    .key("id", AttributeValue::S(record_key))
                    .send()
                    .await
                    .map_err(|error| format!("failed to read counter item from dynamodb: {error}"))?;

                let Some(item) = output.item else {
                    return Ok(None);
                };

                let views = item
                    .get("views")
                    .ok_or_else(|| "counter item is missing the views attribute".to_string())?
                    .as_n()
                    .map_err(|_| "counter views attribute is not a number".to_string())?
                    .parse::<u64>()
                    .map_err(|error| format!("counter views attribute is not a valid count: {error}"))?;

                let id = item
                    .get("id")
                    .and_then(|value| value.as_s().ok())
                    .cloned()
                    .unwrap_or_else(|| COUNTER_RECORD_KEY.to_string());

                Ok(Some(CounterRecord { id, views }))
            })
        })
    }

    fn put_record(&self, record: &CounterRecord) -> Result<(), String> {
        let client = self.dynamodb_client.clone();
        let table_name = self.table_name.clone();
        let record = record.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .item("id", AttributeValue::S(record.id))
                    .item("views", AttributeValue::N(record.views.to_string()))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write counter item to dynamodb: {error}"))
            })
        })
    }
}

fn counter_config_from_env() -> CounterConfig {
    let defaults = CounterConfig::default();
    CounterConfig {
        region: std::env::var("COUNTER_TABLE_REGION").unwrap_or(defaults.region),
        table_name: std::env::var("COUNTER_TABLE_NAME").unwrap_or(defaults.table_name),
    }
}

async fn handle_request(_event: LambdaEvent<Value>) -> Result<u64, Error> {
    let config = counter_config_from_env();
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await;

    let store = DynamoDbCounterStore {
        table_name: config.table_name,
        dynamodb_client: aws_sdk_dynamodb::Client::new(&aws_config),
    };

    handle_counter_event(&store).map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
