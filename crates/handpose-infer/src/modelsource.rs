use std::path::PathBuf;

/// Where to load a network from.
#[derive(Debug, Clone)]
pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}
