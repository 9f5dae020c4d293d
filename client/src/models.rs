use serde_json::{Map, Value};

pub const SEARCH_RESULTS_FIELD: &str = "google_search_results";
pub const ANSWER_FIELD: &str = "answer";
pub const MAX_SEARCH_RESULTS: usize = 5;

pub const SEARCH_RESULTS_PREFIX: &str =
    "🤖 I couldn't find an exact answer in the PDF, but here are some Google search results:\n\n";
pub const SEARCH_FAILED_TEXT: &str =
    "🤖 No relevant answers in the PDF, but Google search failed to return valid results.";
pub const NO_ANSWER_TEXT: &str = "🤖 Sorry, I couldn't generate a response.";

const DEFAULT_TITLE: &str = "No Title";
const DEFAULT_LINK: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub title: Option<String>,
    pub link: Option<String>,
}

impl SearchResult {
    fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            title: object.get("title").and_then(display_value),
            link: object.get("link").and_then(display_value),
        }
    }

    pub fn to_markdown(&self) -> String {
        format!(
            "- [{}]({})",
            self.title.as_deref().unwrap_or(DEFAULT_TITLE),
            self.link.as_deref().unwrap_or(DEFAULT_LINK)
        )
    }
}

/// Decoded body of a successful `/ask-question/` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskReply {
    Answer(String),
    SearchResults(Vec<SearchResult>),
    SearchFailed,
    NoAnswer,
}

impl AskReply {
    /// A present `google_search_results` key always wins over `answer`,
    /// even when its value is unusable.
    pub fn decode(body: &Value) -> Self {
        let Some(object) = body.as_object() else {
            return AskReply::NoAnswer;
        };

        if let Some(results) = object.get(SEARCH_RESULTS_FIELD) {
            return match results.as_array() {
                Some(items) if items.iter().all(Value::is_object) => AskReply::SearchResults(
                    items
                        .iter()
                        .filter_map(Value::as_object)
                        .map(SearchResult::from_object)
                        .collect(),
                ),
                _ => AskReply::SearchFailed,
            };
        }

        match object.get(ANSWER_FIELD).and_then(display_value) {
            Some(answer) => AskReply::Answer(answer),
            None => AskReply::NoAnswer,
        }
    }

    pub fn into_bot_text(self) -> String {
        match self {
            AskReply::Answer(answer) => answer,
            AskReply::SearchResults(results) => {
                let formatted = results
                    .iter()
                    .take(MAX_SEARCH_RESULTS)
                    .map(SearchResult::to_markdown)
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{}{}", SEARCH_RESULTS_PREFIX, formatted)
            }
            AskReply::SearchFailed => SEARCH_FAILED_TEXT.to_string(),
            AskReply::NoAnswer => NO_ANSWER_TEXT.to_string(),
        }
    }
}

// Strings verbatim, null as missing, anything else as its JSON text.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
