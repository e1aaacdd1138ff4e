//! Basic usage example

use envtag::EnvTag;

#[derive(Debug, Default, EnvTag)]
struct Config {
    // Loaded from DATABASE_URL, left empty if unset
    pub database_url: String,

    // With default value
    #[envtag(env = "server_addr", default = "127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[envtag(default = "10")]
    pub max_connections: i32,

    // Boolean type
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let mut config = Config::default();
    let help = envtag::parse(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!();

    help.print_usage();

    Ok(())
}
