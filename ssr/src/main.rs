#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
mod server {
    use axum::{
        body::Body as AxumBody,
        extract::State,
        http::Request,
        response::{IntoResponse, Response},
    };
    use axum::{routing::get, Router};
    use http::{header, Method};
    use leptos::prelude::*;
    use leptos_axum::handle_server_fns_with_context;
    use leptos_axum::{file_and_error_handler, generate_route_list, LeptosRoutes};
    use shipment_visualizer_ssr::app::{shell, App};
    use shipment_visualizer_ssr::init::AppStateBuilder;
    use state::server::AppState;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::trace::TraceLayer;
    use tracing::instrument;
    use tracing_subscriber::EnvFilter;

    const DEFAULT_LOG_FILTER: &str =
        "info,shipment_visualizer_ssr=debug,page=debug,tower_http=info";

    #[instrument(skip(app_state))]
    pub async fn server_fn_handler(
        State(app_state): State<AppState>,
        request: Request<AxumBody>,
    ) -> impl IntoResponse {
        handle_server_fns_with_context(
            move || {
                provide_context(app_state.preview.clone());
            },
            request,
        )
        .await
    }

    #[instrument(skip(state))]
    pub async fn leptos_routes_handler(
        state: State<AppState>,
        req: Request<AxumBody>,
    ) -> Response {
        let State(app_state) = state.clone();
        let handler = leptos_axum::render_route_with_context(
            app_state.routes.clone(),
            move || {
                provide_context(app_state.preview.clone());
            },
            move || shell(app_state.leptos_options.clone()),
        );
        handler(state, req).await.into_response()
    }

    fn init_tracing() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    pub async fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();
        init_tracing();

        // Setting get_configuration(None) means we'll be using cargo-leptos's env values
        let conf = get_configuration(None)?;
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;
        let routes = generate_route_list(App);

        let app_state = AppStateBuilder::new(leptos_options, routes.clone()).build()?;

        let terminate = {
            use tokio::signal;

            let ctrl_c = async {
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("failed to listen for Ctrl+C: {e}");
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
                        tracing::error!("failed to install SIGTERM handler: {e}");
                        std::future::pending::<()>().await;
                    }
                }
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            async {
                tokio::select! {
                    _ = ctrl_c => {},
                    _ = terminate => {},
                }
                tracing::info!("stopping...");
            }
        };

        let app = Router::new()
            .route(
                "/api/{*fn_name}",
                get(server_fn_handler).post(server_fn_handler),
            )
            .layer(
                CorsLayer::new()
                    .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                    .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
                    .allow_origin(Any),
            )
            .leptos_routes_with_handler(routes, get(leptos_routes_handler))
            .fallback(file_and_error_handler::<AppState, _>(shell))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        tracing::info!("listening on http://{}", &addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
        )
        .with_graceful_shutdown(terminate)
        .await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
fn main() {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        if let Err(e) = server::main_impl().await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
    });
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The client bundle is built from the lib target; see `hydrate()`.
}
