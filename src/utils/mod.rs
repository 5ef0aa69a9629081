pub mod auth;
pub mod db;
pub mod error;
pub mod extract;
pub mod logging;
pub mod parent;
pub mod response;

pub use error::AppError;
pub use response::{BaseResponse, ErrorResponse};
