pub mod cli;
pub mod comic;

pub use cli::{Cli, Command};
pub use comic::{ChapterContent, ChapterRef, ComicDetail, ComicSummary};
