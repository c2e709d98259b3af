pub mod articles;
pub mod health;
pub mod retrieval;
pub mod workflow;

pub use articles::{
    batch_handler, create_article_handler, delete_article_handler, get_article_handler,
    list_articles_handler,
};
pub use health::health_handler;
pub use retrieval::{
    retrieve_by_categories_handler, retrieve_by_ids_handler, retrieve_by_preferences_handler,
    search_articles_handler,
};
pub use workflow::workflow_handler;
