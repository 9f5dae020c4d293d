use crate::config::ClientConfig;
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::Value;

pub const UPLOAD_FIELD: &str = "file";
pub const QUERY_PARAM: &str = "query";

/// The RAG backend as seen by the chat client. Only a 200 counts as success.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn upload_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ClientError>;

    async fn ask_question(&self, query: &str) -> Result<Value, ClientError>;
}

pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn upload_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ClientError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.client
            .post(self.config.upload_url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Upload endpoint answered {}", status);
            return Err(ClientError::UploadRejected(status));
        }

        Ok(())
    }

    async fn ask_question(&self, query: &str) -> Result<Value, ClientError> {
        let response = self.client
            .post(self.config.ask_url.clone())
            .query(&[(QUERY_PARAM, query)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Question endpoint answered {}", status);
            return Err(ClientError::QueryRejected(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
