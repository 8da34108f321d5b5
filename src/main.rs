#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), promptfeed::error::AppError> {
    use axum::Router;
    use clap::Parser;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use promptfeed::app::App;
    use promptfeed::server::config::Cli;
    use promptfeed::server::state::AppState;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let leptos_options = leptos::config::LeptosOptions::builder()
        .output_name(std::sync::Arc::<str>::from("promptfeed"))
        .site_root(std::sync::Arc::<str>::from(cli.site_root.as_str()))
        .site_pkg_dir(std::sync::Arc::<str>::from("pkg"))
        .env(leptos::config::Env::PROD)
        .site_addr(cli.site_addr)
        .reload_port(3001)
        .build();
    let addr = leptos_options.site_addr;

    let state = AppState::new(leptos_options.clone(), &cli).await?;
    let routes = generate_route_list(App);

    let app = Router::new()
        .merge(promptfeed::server::api::routes())
        .leptos_routes(&state, routes, {
            let leptos_options = leptos_options.clone();
            move || {
                use promptfeed::app::shell;
                shell(leptos_options.clone())
            }
        })
        .fallback(axum::routing::get_service(ServeDir::new(
            leptos_options.site_root.as_ref(),
        )))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {}
