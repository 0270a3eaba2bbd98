pub mod html;
pub mod redirect;

// Normal HTML responses
pub use html::{html_response, html_response_with_status};

// Non-HTML answers
pub use redirect::{no_content, plain_text, see_other};

pub use crate::errors::ResultResp;
