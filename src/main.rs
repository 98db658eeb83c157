#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
mod server {
    use std::net::SocketAddr;

    use thiserror::Error;

    /// Failures that stop the server from starting or running
    #[derive(Debug, Error)]
    pub enum ServerError {
        #[error("failed to load leptos configuration: {0}")]
        Configuration(String),
        #[error("failed to bind {addr}: {source}")]
        Bind {
            addr: SocketAddr,
            #[source]
            source: std::io::Error,
        },
        #[error("server stopped unexpectedly: {0}")]
        Serve(#[source] std::io::Error),
    }

    pub async fn run() -> Result<(), ServerError> {
        use axum::Router;
        use leptos::prelude::*;
        use leptos_axum::{LeptosRoutes, generate_route_list};
        use tower_http::compression::{CompressionLayer, CompressionLevel};
        use tower_http::services::ServeDir;
        use video_insights::app::*;
        use video_insights::core::config::Config;

        // Load application config from environment variables
        let config = Config::from_env();
        tracing::info!(
            "Config loaded: public_url={}, compression={}",
            config.has_public_url(),
            config.compression
        );

        // Load configuration from Cargo.toml [package.metadata.leptos]
        // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
        let conf = get_configuration(None)
            .map_err(|err| ServerError::Configuration(err.to_string()))?;
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;

        // Generate the list of routes in your Leptos App
        let routes = generate_route_list(App);

        let site_meta = SiteMeta {
            canonical_url: config.public_url.clone(),
        };

        // Create ServeDir for pkg with pre-compressed file support
        // This serves .br (brotli) and .gz (gzip) files automatically
        let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
            .precompressed_br()
            .precompressed_gzip();

        let app = Router::new()
            .nest_service("/pkg", pkg_service)
            .leptos_routes_with_context(
                &leptos_options,
                routes,
                move || provide_context(site_meta.clone()),
                {
                    let leptos_options = leptos_options.clone();
                    move || shell(leptos_options.clone())
                },
            )
            .fallback(leptos_axum::file_and_error_handler(shell))
            .with_state(leptos_options);

        // Brotli first, gzip as the widely supported fallback
        let app = if config.compression {
            app.layer(
                CompressionLayer::new()
                    .br(true)
                    .gzip(true)
                    .quality(CompressionLevel::Best),
            )
        } else {
            app
        };

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("listening on http://{}", &addr);

        axum::serve(listener, app.into_make_service())
            .await
            .map_err(ServerError::Serve)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_bind_error_names_address() {
            let err = ServerError::Bind {
                addr: "127.0.0.1:3000".parse().unwrap(),
                source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
            };
            assert_eq!(
                err.to_string(),
                "failed to bind 127.0.0.1:3000: address in use"
            );
        }

        #[test]
        fn test_configuration_error_message() {
            let err = ServerError::Configuration("missing site-root".to_string());
            assert_eq!(
                err.to_string(),
                "failed to load leptos configuration: missing site-root"
            );
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match server::run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
