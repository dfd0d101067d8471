pub mod bearer;

use axum::Router;

/// Address the router is served on in local development builds.
pub const LOCAL_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3030);

/// Runs an Axum router in either local development mode or Lambda runtime mode.
///
/// In debug builds (`#[cfg(debug_assertions)]`), the router is served on
/// [`LOCAL_ADDR`] using a standard Axum server that shuts down gracefully
/// on Ctrl+C or SIGTERM.
///
/// In release builds, the router is wrapped with the Lambda runtime adapter
/// and executed as a Lambda function.
///
/// # Errors
///
/// Returns an error if:
/// - The local server fails to bind to the port (debug mode)
/// - The Lambda runtime fails to start (release mode)
pub async fn run_app(app: Router) -> Result<(), lambda_http::Error> {
    #[cfg(debug_assertions)]
    {
        let addr = std::net::SocketAddr::from(LOCAL_ADDR);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("starting local development server on http://{addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    }

    #[cfg(not(debug_assertions))]
    {
        use lambda_http::tower;

        let app = tower::ServiceBuilder::new()
            .layer(axum_aws_lambda::LambdaLayer::default().trim_stage())
            .service(app);

        lambda_http::run(app).await?;
    }

    Ok(())
}

#[cfg(debug_assertions)]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::warn!("signal received, starting graceful shutdown");
}
