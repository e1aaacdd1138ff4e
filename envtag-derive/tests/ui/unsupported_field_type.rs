// Only bool, signed integers, f64, String and collections implement EnvValue

use envtag::EnvTag;

#[derive(EnvTag)]
struct Config {
    #[envtag(env = "port", default = "8080")]
    pub port: u32,
}

fn main() {}
