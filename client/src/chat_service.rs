use crate::backend_service::Backend;
use crate::error::ClientError;
use crate::models::{AskReply, Message};
use crate::session::Session;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Uploaded,
    AlreadyUploaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskStatus {
    Answered,
    Ignored,
}

/// Mirrors the file picker's type filter; the content is never inspected.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

pub struct ChatService {
    backend: Arc<dyn Backend>,
}

impl ChatService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub async fn upload_pdf(&self, session: &mut Session, path: &Path) -> Result<UploadStatus, ClientError> {
        if session.pdf_uploaded() {
            log::info!("[{}] PDF already uploaded, skipping {}", session.id(), path.display());
            return Ok(UploadStatus::AlreadyUploaded);
        }

        if !is_pdf_path(path) {
            return Err(ClientError::NotAPdf(path.to_path_buf()));
        }

        // Read the raw bytes
        let bytes = tokio::fs::read(path).await.map_err(|source| ClientError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "document.pdf".to_string());

        // Send them to the backend
        log::info!("[{}] Uploading {} ({} bytes)", session.id(), file_name, bytes.len());
        self.backend.upload_pdf(&file_name, bytes).await?;

        session.mark_pdf_uploaded();
        log::info!("[{}] PDF uploaded", session.id());
        Ok(UploadStatus::Uploaded)
    }

    pub async fn ask(&self, session: &mut Session, question: &str) -> Result<AskStatus, ClientError> {
        if !session.pdf_uploaded() {
            return Err(ClientError::PdfNotUploaded);
        }

        if question.is_empty() {
            return Ok(AskStatus::Ignored);
        }

        // Query the backend
        log::info!("[{}] Asking: {}", session.id(), question);
        let body = self.backend.ask_question(question).await?;

        // Decode the reply
        let reply = AskReply::decode(&body);
        log::debug!("[{}] Decoded reply: {:?}", session.id(), reply);

        // Record the exchange
        session.push(Message::user(question));
        session.push(Message::bot(reply.into_bot_text()));
        Ok(AskStatus::Answered)
    }
}
