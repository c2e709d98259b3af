pub mod article;
pub mod category;
pub mod user_settings;

pub use article::{Article, NewArticle};
pub use category::Category;
pub use user_settings::UserSettings;
