mod image_url;

pub use image_url::{function_handler, issue_url};
