use std::sync::Arc;

use crate::db::InMemoryStorage;

pub(crate) mod repository;

pub(crate) struct UserProvider {
    pub storage: Arc<InMemoryStorage>,
}
