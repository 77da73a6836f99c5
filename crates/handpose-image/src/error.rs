use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Io(std::io::Error),
    Decode(String),
    Encode(String),
    /// The tensor does not describe an HWC image the encoder can write.
    Layout(String),
    Tensor(handpose_base::TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Io(err) => write!(f, "io error: {err}"),
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::Layout(msg) => write!(f, "layout error: {msg}"),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Io(err) => Some(err),
            ImageError::Tensor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err)
    }
}

impl From<handpose_base::TensorError> for ImageError {
    fn from(err: handpose_base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}
