use tokio::net::TcpListener;

/// Run the fixture server standalone, for poking at the client by hand.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
    println!("fixture server listening on {}", listener.local_addr()?);
    mock_server::run(listener).await
}
