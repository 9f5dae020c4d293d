use colored::Colorize;
use rag_client::{is_pdf_path, render_history, AskStatus, ClientError, Session, Severity, UploadStatus};
use std::path::Path;
use std::io::{self, Write};

pub const TITLE: &str = "📄 AI Chatbot with RAG";
pub const SUBTITLE: &str = "🤖 Ask me anything!But make sure you have uploaded the pdf";

pub const UPLOADING: &str = "📤 Uploading...";
pub const UPLOAD_OK: &str = "✅ PDF uploaded successfully!";
pub const UPLOAD_FAILED: &str = "❌ PDF upload failed. Try again.";
pub const ALREADY_UPLOADED: &str = "ℹ️ A PDF is already uploaded for this session.";
pub const UPLOAD_FIRST: &str = "⚠️ Please upload a PDF first!";
pub const FETCH_FAILED: &str = "❌ Error: Unable to fetch response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

impl Notice {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Only announced when the upload will actually reach the backend.
pub fn uploading_notice(session: &Session, path: &Path) -> Option<Notice> {
    if session.pdf_uploaded() || !is_pdf_path(path) {
        return None;
    }
    Some(Notice::new(Level::Info, UPLOADING))
}

pub fn upload_notice(result: &Result<UploadStatus, ClientError>) -> Notice {
    match result {
        Ok(UploadStatus::Uploaded) => Notice::new(Level::Success, UPLOAD_OK),
        Ok(UploadStatus::AlreadyUploaded) => Notice::new(Level::Info, ALREADY_UPLOADED),
        Err(_) => Notice::new(Level::Error, UPLOAD_FAILED),
    }
}

/// `None` means nothing to tell the user, as for an empty question.
pub fn ask_notice(result: &Result<AskStatus, ClientError>) -> Option<Notice> {
    match result {
        Ok(_) => None,
        Err(err) => match err.severity() {
            Severity::Warning => Some(Notice::new(Level::Warning, UPLOAD_FIRST)),
            Severity::Error => Some(Notice::new(Level::Error, FETCH_FAILED)),
        },
    }
}

pub struct Screen {
    styled: bool,
}

impl Screen {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    fn paint(&self, notice: &Notice) -> String {
        if !self.styled {
            return notice.text.clone();
        }
        match notice.level {
            Level::Info => notice.text.blue().to_string(),
            Level::Success => notice.text.green().to_string(),
            Level::Warning => notice.text.yellow().to_string(),
            Level::Error => notice.text.red().bold().to_string(),
        }
    }

    pub fn show(&self, notice: &Notice) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", self.paint(notice))?;
        out.flush()
    }

    /// Clears the terminal and draws the banner, the whole history and an
    /// optional notice underneath.
    pub fn redraw(&self, session: &Session, notice: Option<&Notice>) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.styled {
            write!(out, "\x1B[2J\x1B[H")?;
        }

        let (title, subtitle) = if self.styled {
            (TITLE.bold().to_string(), SUBTITLE.dimmed().to_string())
        } else {
            (TITLE.to_string(), SUBTITLE.to_string())
        };
        let pdf_state = if session.pdf_uploaded() { "PDF: uploaded" } else { "PDF: none" };
        writeln!(out, "{}\n{}\n{}\n", title, subtitle, pdf_state)?;
        write!(out, "{}", render_history(session.messages(), self.styled))?;

        if let Some(notice) = notice {
            writeln!(out, "{}", self.paint(notice))?;
        }
        out.flush()
    }

    pub fn prompt(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "> ")?;
        out.flush()
    }
}
