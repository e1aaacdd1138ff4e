// Tag values are strings, even for numeric fields

use envtag::EnvTag;

#[derive(EnvTag)]
struct Config {
    #[envtag(default = 42)]
    pub port: i32,
}

fn main() {}
