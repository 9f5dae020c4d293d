pub mod models;
pub mod session;
pub mod error;
pub mod config;
pub mod backend_service;
pub mod chat_service;
pub mod render;

pub use models::*;
pub use session::Session;
pub use error::{ClientError, Severity};
pub use config::ClientConfig;
pub use backend_service::{Backend, HttpBackend};
pub use chat_service::{is_pdf_path, AskStatus, ChatService, UploadStatus};
pub use render::render_history;
pub use reqwest::StatusCode;
