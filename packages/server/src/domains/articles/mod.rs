// Articles domain: models, retrieval core, batch ingestion

pub mod ingest;
pub mod models;
pub mod service;

pub use ingest::{create_article, ingest_batch, ArticleCreate, BatchOutcome, ExtractBatch};
pub use models::{Article, Category, NewArticle, UserSettings};
pub use service::{ArticleDigest, ArticleService, ScoredArticle, SettingsView};
