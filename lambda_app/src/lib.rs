use figment::{Figment, providers::Env};

/// Builds an application context out of its extracted configuration.
pub trait ContextProvider<Config> {
    fn new(config: Config) -> impl Future<Output = Self>;
}

/// Installs the JSON log subscriber used by every function.
///
/// The log level can be overridden with the `RUST_LOG` env var.
pub fn init_tracing() {
    // https://docs.aws.amazon.com/lambda/latest/dg/rust-logging.html
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // the current span is already part of the span list.
        .with_current_span(false)
        // ANSI color codes show up as garbage in CloudWatch logs.
        .with_ansi(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .with_target(false)
        .init();
}

/// Extracts a typed configuration from the raw process environment.
///
/// Keys are matched case-insensitively, so `BACKEND_DELETE_URL` fills a
/// `backend_delete_url` field.
///
/// # Errors
/// If a variable cannot be deserialized into the requested field type,
/// or a required field is missing.
pub fn load_config<'a, Config: serde::Deserialize<'a>>()
-> Result<Config, figment::Error> {
    Figment::new().merge(Env::raw()).extract()
}

/// Initialize logging, extract the configuration and hand it to the
/// context provider.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
pub async fn create_app_context<'a, A, Config: serde::Deserialize<'a>>()
-> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
{
    init_tracing();

    let config: Config = load_config()?;

    tracing::info!("configuration loaded");

    Ok(A::new(config).await)
}
