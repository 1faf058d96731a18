use crate::store::model::UserRecord;

pub trait UserStore: Send + Sync {
    /// Добавление записи в конец списка
    fn insert(&self, record: UserRecord) -> Result<(), anyhow::Error>;
    /// Поиск первой записи с совпадающим id
    fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, anyhow::Error>;
}
