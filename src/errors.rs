use thiserror::Error;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct AppError(Box<ErrorKind>);

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),
    #[error("UsageError: {0}")]
    UsageError(String),
    #[error("PlotError: {0}")]
    PlotError(String),
}

impl AppError {
    pub fn usage(msg: impl Into<String>) -> AppError {
        AppError(Box::new(ErrorKind::UsageError(msg.into())))
    }

    /// Wraps a plotters drawing error. The backend error type is generic over the
    /// backend, so it is carried as its rendered message.
    pub fn plot<E: std::fmt::Display>(err: E) -> AppError {
        AppError(Box::new(ErrorKind::PlotError(err.to_string())))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl<E> From<E> for AppError
where
    ErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        AppError(Box::new(ErrorKind::from(err)))
    }
}
pub type Result<T> = std::result::Result<T, AppError>;
