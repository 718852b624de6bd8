//! Terminal chat client: connects to one server and runs the session
//! loop over the connection and stdin.

mod banner;

use anyhow::Context as _;
use chat_client::Session;
use clap::Parser;
use tokio::net::TcpStream;

#[derive(Parser)]
#[command(name = "chat-client")]
#[command(about = "Line-delimited JSON chat client", long_about = None)]
struct Cli {
    /// Server hostname or address
    host: String,

    /// Server TCP port
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let stream = TcpStream::connect((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("failed to connect to {}:{}", cli.host, cli.port))?;
    tracing::info!(host = %cli.host, port = cli.port, "connected");

    println!("{}", banner::BANNER);

    Session::new(stream, tokio::io::stdin())
        .run()
        .await
        .context("session ended with an error")?;

    Ok(())
}
