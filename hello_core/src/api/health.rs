/// Where the liveness endpoint lives.
pub const PATH: &str = "/health";

/// What the liveness endpoint says when the server is up.
pub const OK: &str = "OK";
