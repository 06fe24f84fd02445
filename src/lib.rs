pub mod app;
pub mod backend;
pub mod dir;
pub mod logger;

#[cfg(test)]
mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
