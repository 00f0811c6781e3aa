pub mod app_state;
pub mod handlers;
pub mod responder;
pub mod router;

pub use responder::Responder;
