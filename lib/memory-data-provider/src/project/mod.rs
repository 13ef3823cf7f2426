use std::sync::Arc;

use crate::db::InMemoryStorage;

pub(crate) mod repository;

pub(crate) struct ProjectProvider {
    pub storage: Arc<InMemoryStorage>,
}
