use std::net::SocketAddr;

use aws_config::BehaviorVersion;
use tokio::signal;
use tower::ServiceBuilder;
use tracing_subscriber::EnvFilter;

use rollcall::config::Config;
use rollcall::services::Services;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    let in_lambda = std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    if in_lambda {
        // CloudWatch stamps each line already
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .without_time()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!("Starting rollcall");

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let services = Services::aws(&sdk_config, &config);

    let addr = SocketAddr::new(config.host, config.port);
    let app = rollcall::build_app(config, services);

    if in_lambda {
        tracing::info!("Serving through the Lambda runtime");
        let app = ServiceBuilder::new()
            .map_request(rollcall::lambda::strip_stage)
            .service(app);
        return lambda_http::run(app).await;
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
