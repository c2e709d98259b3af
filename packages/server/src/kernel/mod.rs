// Infrastructure: traits, external clients, dependency container, workflow

pub mod deps;
pub mod embeddings;
pub mod traits;
pub mod workflow;

pub use deps::{ParallelContentService, ServerDeps};
pub use embeddings::AzureEmbeddingService;
pub use traits::{BaseContentService, BaseEmbeddingService};
pub use workflow::{search_extract_store, WorkflowReport, WorkflowRequest};
