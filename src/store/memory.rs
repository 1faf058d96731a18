use crate::store::interface::UserStore;
use crate::store::model::UserRecord;

use std::sync::RwLock;

pub struct MemoryStore {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

impl UserStore for MemoryStore {
    fn insert(&self, record: UserRecord) -> Result<(), anyhow::Error> {
        self.users.write().unwrap().push(record);
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, anyhow::Error> {
        let users = self.users.read().unwrap();
        // Уникальность id не гарантируется, берем первое совпадение
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}
