use crate::models::Message;
use uuid::Uuid;

/// In-memory state of one chat run. The message list only grows and the
/// upload flag only ever goes from false to true.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    messages: Vec<Message>,
    pdf_uploaded: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            pdf_uploaded: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pdf_uploaded(&self) -> bool {
        self.pdf_uploaded
    }

    pub(crate) fn mark_pdf_uploaded(&mut self) {
        self.pdf_uploaded = true;
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
