use tokio::net::TcpListener;

/// Standalone entry point so the store can back an interactive `tasklist`
/// session, not just the integration tests.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("task store listening on {addr}");
    mock_server::run(listener).await
}
