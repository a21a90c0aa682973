// Request handlers, one module per endpoint.

pub mod frequency;
pub mod history;
