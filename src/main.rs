use anyhow::Context;
use axum::{
    extract::State,
    middleware,
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use loja_api::handlers::{auth, clientes, produtos};
use loja_api::middleware::auth::require_cliente;
use loja_api::{config, database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting loja-api in {:?} mode", config.environment);

    let pool = database::connect(config).context("failed to create database pool")?;

    // The pool is lazy, so the server can come up before the database does;
    // a failed migration run is reported and retried on next start.
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::warn!("skipping migrations: {}", e);
    }

    let app = app(AppState { db: pool });

    // Allow tests or deployments to override port via env
    let port = std::env::var("LOJA_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("loja-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(cliente_routes())
        .merge(produto_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cliente_routes() -> Router<AppState> {
    // Listing clients is the only route gated on the "cliente" role; the
    // route_layer is applied before the public routes are added so login and
    // registration stay open.
    Router::new()
        .route("/clientes", get(clientes::listar))
        .route_layer(middleware::from_fn(require_cliente))
        .route("/clientes", post(clientes::criar))
        .route("/clientes/login", post(auth::login))
}

fn produto_routes() -> Router<AppState> {
    Router::new()
        .route("/produtos", get(produtos::listar).post(produtos::criar))
        .route("/produtos/:id", put(produtos::atualizar).delete(produtos::deletar))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "loja-api",
        "version": version,
        "endpoints": {
            "login": "POST /clientes/login (public)",
            "clientes": "GET /clientes (cliente role), POST /clientes (public)",
            "produtos": "GET/POST /produtos, PUT/DELETE /produtos/:id (public)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.db).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
