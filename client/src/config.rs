use url::{ParseError, Url};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
const UPLOAD_PATH: &str = "upload-pdf/";
const ASK_PATH: &str = "ask-question/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub upload_url: Url,
    pub ask_url: Url,
}

impl ClientConfig {
    pub fn from_base_url(base_url: &str) -> Result<Self, ParseError> {
        let base = base_url.trim_end_matches('/');
        Ok(Self {
            upload_url: Url::parse(&format!("{}/{}", base, UPLOAD_PATH))?,
            ask_url: Url::parse(&format!("{}/{}", base, ASK_PATH))?,
        })
    }

    pub fn with_upload_url(mut self, upload_url: &str) -> Result<Self, ParseError> {
        self.upload_url = Url::parse(upload_url)?;
        Ok(self)
    }

    pub fn with_ask_url(mut self, ask_url: &str) -> Result<Self, ParseError> {
        self.ask_url = Url::parse(ask_url)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::from_base_url(DEFAULT_BACKEND_URL).unwrap();
        assert_eq!(config.upload_url.as_str(), "http://127.0.0.1:8000/upload-pdf/");
        assert_eq!(config.ask_url.as_str(), "http://127.0.0.1:8000/ask-question/");
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let config = ClientConfig::from_base_url("http://10.0.0.5:9000/").unwrap();
        assert_eq!(config.upload_url.as_str(), "http://10.0.0.5:9000/upload-pdf/");
        assert_eq!(config.ask_url.as_str(), "http://10.0.0.5:9000/ask-question/");
    }

    #[test]
    fn test_base_with_path_prefix() {
        let config = ClientConfig::from_base_url("https://rag.example.com/api").unwrap();
        assert_eq!(config.ask_url.as_str(), "https://rag.example.com/api/ask-question/");
    }

    #[test]
    fn test_endpoint_overrides() {
        let config = ClientConfig::from_base_url(DEFAULT_BACKEND_URL)
            .unwrap()
            .with_ask_url("http://other:1234/ask")
            .unwrap();
        assert_eq!(config.ask_url.as_str(), "http://other:1234/ask");
        assert_eq!(config.upload_url.as_str(), "http://127.0.0.1:8000/upload-pdf/");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ClientConfig::from_base_url("not a url").is_err());
    }
}
