pub mod handlers;
pub mod header;
pub mod results;
pub mod text_query;
pub mod upload_section;
pub mod utils;
