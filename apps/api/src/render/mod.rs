// HTML template rendering and document export.

pub mod export;
pub mod handlers;
pub mod templates;
