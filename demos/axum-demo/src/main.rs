//! Minimal axum app serving generated API documentation at `/docs`.

use axum::Router;
use routedoc::{ApiDoc, EndpointConfig, HttpMethod, ServeError, Shape};
use tracing::info;

#[derive(Shape)]
struct CreateUser {
    #[shape(required)]
    name: String,
    age: u32,
    tags: Vec<String>,
}

#[derive(Shape)]
struct User {
    id: u64,
    name: String,
    age: u32,
}

#[derive(Shape)]
struct ApiError {
    message: String,
}

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,routedoc=debug".into()),
        )
        .init();

    let mut doc = ApiDoc::new();
    doc.accumulate([
        EndpointConfig::new::<CreateUser>("/users", vec![HttpMethod::Post])
            .response::<User>(201)
            .response::<ApiError>(400),
        EndpointConfig::new::<User>("/users/{id}", vec![HttpMethod::Get, HttpMethod::Delete])
            .response::<User>(200)
            .response::<ApiError>(404),
    ])?;

    // a render failure here is fatal to startup
    let app = Router::new().route("/docs", doc.handler()?);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("failed to bind 127.0.0.1:3000");
    info!("docs served on http://127.0.0.1:3000/docs");
    axum::serve(listener, app).await.expect("server error");
    Ok(())
}
