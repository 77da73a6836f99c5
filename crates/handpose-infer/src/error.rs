use std::fmt;

#[derive(Debug)]
pub enum InferError {
    ShapeMismatch { expected: String, got: String },
    ModelLoad(String),
    BackendError(String),
    InvalidInput {
        name: String,
        expected_names: Vec<String>,
    },
    UnsupportedDtype(String),
    Config(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::BackendError(msg) => write!(f, "backend error: {msg}"),
            InferError::InvalidInput {
                name,
                expected_names,
            } => write!(
                f,
                "invalid input '{name}', model expects {}",
                expected_names.join(", ")
            ),
            InferError::UnsupportedDtype(msg) => write!(f, "unsupported dtype: {msg}"),
            InferError::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<handpose_base::TensorError> for InferError {
    fn from(err: handpose_base::TensorError) -> Self {
        InferError::BackendError(format!("failed to create tensor: {}", err))
    }
}
