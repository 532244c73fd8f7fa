use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayBotError {
    /// Transport failure while talking to the messaging platform.
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A global tracing subscriber was already installed.
    #[error("Tracing already initialized: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, RelayBotError>;
