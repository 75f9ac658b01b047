use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("MediaConnect request failed: {0}")]
    MediaConnect(#[source] Box<aws_sdk_mediaconnect::Error>),

    #[error("CloudWatch request failed: {0}")]
    CloudWatch(#[source] Box<aws_sdk_cloudwatch::Error>),

    #[error("dashboard body is not valid JSON: {0}")]
    MalformedDashboard(#[from] serde_json::Error),

    #[error("dashboard body has no widgets array")]
    MissingWidgets,

    #[error("response is missing {0}")]
    MissingField(&'static str),
}

impl Error {
    pub(crate) fn mediaconnect(err: impl Into<aws_sdk_mediaconnect::Error>) -> Self {
        Error::MediaConnect(Box::new(err.into()))
    }

    pub(crate) fn cloudwatch(err: impl Into<aws_sdk_cloudwatch::Error>) -> Self {
        Error::CloudWatch(Box::new(err.into()))
    }
}
