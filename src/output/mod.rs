//! Rendered output documents.

pub mod html;

pub use html::ApiReferenceHtmlWriter;
