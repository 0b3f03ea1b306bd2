use feedback_service::infrastructure::memory::InMemoryFeedbackRepository;
use feedback_service::infrastructure::repositories_impl::FeedbackRepositoryImpl;
use feedback_service::infrastructure::settings::{dynamodb_client, FeedbackDatabaseSettings};
use feedback_service::interface::routers::create_app;
use lambda_http::{run, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let app = match FeedbackDatabaseSettings::from_env()? {
        FeedbackDatabaseSettings::DynamoDb {
            table_name,
            endpoint_url,
        } => {
            tracing::info!("Using DynamoDB table {}", table_name);
            let repo = FeedbackRepositoryImpl::builder()
                .client(dynamodb_client(endpoint_url.as_deref()).await)
                .table_name(table_name)
                .build();
            create_app(repo)
        }
        FeedbackDatabaseSettings::Memory => {
            tracing::warn!("Using in-memory feedback store, records are lost on exit");
            create_app(InMemoryFeedbackRepository::default())
        }
    };

    run(app).await
}
