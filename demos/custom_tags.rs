//! Example reading names and defaults from custom tag keys

use envtag::{EnvTag, EnvTagError, Help, Settings};

#[derive(Debug, Default, EnvTag)]
struct Config {
    // The same struct can carry tags for more than one naming scheme
    #[envtag(env = "PORT", cfg = "http-port", fallback = "8080")]
    pub port: i32,

    #[envtag(env = "RATIO", cfg = "sample-ratio", fallback = "0.1")]
    pub sample_ratio: f64,
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::new("cfg", "fallback", true);

    std::env::set_var("HTTP_PORT", "not-a-port");

    let mut config = Config::default();
    let mut help = Help::new();
    match settings.parse(&mut config, &mut help) {
        Err(EnvTagError::ParseInt { name, value, .. }) => {
            println!("{name} has an invalid value {value:?}, keeping {}", config.port);
        }
        other => other?,
    }

    std::env::set_var("HTTP_PORT", "9090");

    let mut config = Config::default();
    let mut help = Help::new();
    settings.parse(&mut config, &mut help)?;

    println!("Port: {}", config.port);
    println!("Sample Ratio: {}", config.sample_ratio);
    println!();

    help.print_usage();

    Ok(())
}
