use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0} is not a PDF file")]
    NotAPdf(PathBuf),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upload rejected with status {0}")]
    UploadRejected(StatusCode),

    #[error("no PDF has been uploaded in this session")]
    PdfNotUploaded,

    #[error("question rejected with status {0}")]
    QueryRejected(StatusCode),

    #[error("backend returned a body that is not JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn severity(&self) -> Severity {
        match self {
            ClientError::PdfNotUploaded => Severity::Warning,
            _ => Severity::Error,
        }
    }
}
