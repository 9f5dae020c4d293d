use clap::Parser;
use rag_client::config::DEFAULT_BACKEND_URL;
use rag_client::ClientConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rag_chat", about = "Chat with a PDF through a RAG backend")]
pub struct Args {
    /// Base URL of the backend
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Full URL of the upload endpoint, overrides the one derived from --backend-url
    #[arg(long, env = "UPLOAD_API_URL")]
    pub upload_url: Option<String>,

    /// Full URL of the question endpoint, overrides the one derived from --backend-url
    #[arg(long, env = "ASK_API_URL")]
    pub ask_url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// PDF to upload before the first question
    pub pdf: Option<PathBuf>,
}

impl Args {
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = ClientConfig::from_base_url(&self.backend_url)?;
        if let Some(upload_url) = &self.upload_url {
            config = config.with_upload_url(upload_url)?;
        }
        if let Some(ask_url) = &self.ask_url {
            config = config.with_ask_url(ask_url)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_pdf() {
        let args = Args::try_parse_from(["rag_chat", "--no-color", "policy.pdf"]).unwrap();
        assert!(args.no_color);
        assert_eq!(args.pdf, Some(PathBuf::from("policy.pdf")));
    }

    #[test]
    fn test_endpoint_override() {
        let args = Args::try_parse_from([
            "rag_chat",
            "--backend-url",
            "http://10.1.2.3:8000",
            "--ask-url",
            "http://10.1.2.4:9000/ask-question/",
        ])
        .unwrap();
        let config = args.client_config().unwrap();
        assert_eq!(config.upload_url.as_str(), "http://10.1.2.3:8000/upload-pdf/");
        assert_eq!(config.ask_url.as_str(), "http://10.1.2.4:9000/ask-question/");
    }

    #[test]
    fn test_bad_url_is_reported() {
        let args = Args::try_parse_from(["rag_chat", "--backend-url", "not a url"]).unwrap();
        assert!(args.client_config().is_err());
    }
}
