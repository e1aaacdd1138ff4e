// `skip` is the only bare flag

use envtag::EnvTag;

#[derive(EnvTag)]
struct Config {
    #[envtag(required)]
    pub port: i32,
}

fn main() {}
