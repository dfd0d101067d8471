use backend::HttpProfileBackend;
use config::Config;
use structs::AppState;

mod backend;
mod config;
mod handlers;
mod structs;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let state = lambda_app::create_app_context::<
        AppState<HttpProfileBackend>,
        Config,
    >()
    .await?;

    lambda_axum::run_app(handlers::app(state)).await
}
