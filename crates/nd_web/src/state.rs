use crate::ArticleStore;

pub struct AppState {
    pub store: ArticleStore,
}

impl AppState {
    pub fn new(store: ArticleStore) -> Self {
        Self { store }
    }
}
