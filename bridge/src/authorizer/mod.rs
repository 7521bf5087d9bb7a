mod authorizer;
mod authorizer_error;

pub use authorizer::*;
pub use authorizer_error::*;
