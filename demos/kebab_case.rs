//! Example mapping kebab-case tags to SCREAMING_SNAKE_CASE variables

use envtag::{EnvTag, Help, Settings};

#[derive(Debug, EnvTag)]
struct Config {
    // MYAPP_MAX_RETRIES
    #[envtag(env = "max-retries", default = "3")]
    pub max_retries: i64,

    // MYAPP_BACKOFF_FACTOR
    #[envtag(env = "backoff-factor", default = "1.5")]
    pub backoff_factor: f64,

    // MYAPP_LOG_LEVEL, keeps its current value unless overridden
    #[envtag(env = "log-level", default = "info")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_MAX_RETRIES", "5");

    let settings = Settings::default()
        .with_prefix("myapp-")
        .with_kebab_to_snake(true);

    let mut config = Config {
        max_retries: 0,
        backoff_factor: 0.0,
        log_level: "warn".to_string(),
    };
    let mut help = Help::new();
    settings.parse(&mut config, &mut help)?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Max Retries: {}", config.max_retries);
    println!("  Backoff Factor: {}", config.backoff_factor);
    println!("  Log Level: {}", config.log_level);
    println!();

    help.print_defaults();

    Ok(())
}
