//! Serve command implementation.
//!
//! Starts the interactive dashboard server over a data directory.

use std::path::Path;

use vgsales_server::ServerConfig;

use crate::colors;

/// Start the dashboard server.
pub async fn execute(data_dir: &str, port: u16) -> anyhow::Result<()> {
    let path = Path::new(data_dir);

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port,
    };

    println!(
        "\n{}Sales Dashboard{} - Interactive Analytics",
        colors::BOLD,
        colors::RESET
    );
    println!("{}", "─".repeat(50));
    println!(
        "{}  ◆ Data dir:{} {}",
        colors::CYAN,
        colors::RESET,
        path.display()
    );
    println!(
        "{}  ◆ Server:{} http://{}:{}",
        colors::CYAN,
        colors::RESET,
        config.host,
        config.port
    );
    println!("{}", "─".repeat(50));
    println!("{}Press Ctrl+C to stop{}", colors::GREEN, colors::RESET);
    println!();

    vgsales_server::serve(path, config).await?;

    Ok(())
}
