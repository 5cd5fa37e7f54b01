pub mod catalog_client;
pub mod chapter_resolver;
pub mod configuration;
pub mod content_api;
pub mod detail_view;
pub mod error;
pub mod messages;
pub mod models;
pub mod navigation;
pub mod progress;
pub mod reading_session;
pub mod run;
pub mod slug;

pub use catalog_client::{CatalogClient, Fetched};
pub use configuration::Settings;
pub use error::{CatalogError, NetworkError};
pub use models::Cli;
pub use reading_session::{ReadingSession, SessionState};
pub use run::run;
