// Tuple struct fields have no name to fall back on, so they are rejected

use envtag::EnvTag;

#[derive(EnvTag)]
struct Config(#[envtag(env = "port")] i32, String);

fn main() {}
