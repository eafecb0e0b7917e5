pub mod client;
pub mod session;

pub use client::{NewsClient, NewsSource};
pub use session::Session;

pub mod prelude {
    pub use super::client::{NewsClient, NewsSource};
    pub use super::session::Session;
    pub use nd_core::{Action, Article, Config, Error, PageRequest, PageResult, Result};
}
