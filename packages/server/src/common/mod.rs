// Shared types and error taxonomy

pub mod error;

pub use error::{ServiceError, ServiceResult};

/// Fixed dimensionality of every stored embedding, set by the
/// text-embedding-3-small deployment.
pub const EMBEDDING_DIM: usize = 1536;
