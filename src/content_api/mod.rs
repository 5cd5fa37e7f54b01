//! Contract of the remote content API: endpoints, wire shapes and the transport seam.

pub mod transport;
pub mod wire;

pub use transport::{HttpTransport, Transport};

pub const SEARCH_PATH: &str = "comic/search";

pub fn detail_path(processed_link: &str) -> String {
    format!("comic/comic/{processed_link}")
}

pub fn chapter_path(chapter_link: &str) -> String {
    format!("comic/chapter/{chapter_link}")
}
