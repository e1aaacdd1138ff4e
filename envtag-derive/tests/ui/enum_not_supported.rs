// EnvTag binds named struct fields, so enums are rejected

use envtag::EnvTag;

#[derive(EnvTag)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
