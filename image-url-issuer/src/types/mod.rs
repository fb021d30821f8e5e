mod environment;
mod error;
mod response;

pub use environment::{ConfigError, Environment, IssuerConfig};
pub use error::AppError;
pub use response::{json_response, UrlResponse};
