use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArmorForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Export Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Input Error: {0}")]
    Input(String),

    #[error("Thread Pool Error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type AfResult<T> = Result<T, ArmorForgeError>;
