mod health;

pub use health::{health, not_found, require_bare_path};
