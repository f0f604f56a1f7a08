pub mod html;

pub use html::html_response;

use crate::errors::ServerError;
use astra::Response;

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
