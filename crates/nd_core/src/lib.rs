pub mod config;
pub mod error;
pub mod header;
pub mod shell;
pub mod types;
pub mod view;

pub use config::Config;
pub use error::Error;
pub use shell::{Action, Effect, Phase, Screen, UiState};
pub use types::{Article, Media, PageRequest, PageResult, SortDirection, SortSpec};
pub use view::{ArticleEntry, Navigator};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{Article, Config, Error, PageRequest, PageResult, Result};
}
