use crate::framework::{ActorEntity, RecordStore, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// A [`RecordStore`] kept in a `BTreeMap`, so `find_all` and `max_id` follow id order.
///
/// Share one instance behind an `Arc` to simulate a restart: drop the actor, recover a new
/// allocator from the same store, start a new actor.
pub struct InMemoryStore<T: ActorEntity> {
    records: RwLock<BTreeMap<T::Id, T>>,
}

impl<T: ActorEntity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates a store pre-populated with `records`, keyed by their ids.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id(), r)).collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: ActorEntity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: ActorEntity> RecordStore<T> for InMemoryStore<T> {
    async fn insert_one(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let id = record.id();
        if records.contains_key(&id) {
            return Err(StoreError::Duplicate(id.to_string()));
        }
        records.insert(id, record);
        Ok(())
    }

    async fn find_one(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn replace_one(&self, record: T) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_one(&self, id: T::Id) -> Result<bool, StoreError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn max_id(&self) -> Result<Option<T::Id>, StoreError> {
        Ok(self.records.read().await.keys().next_back().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = InMemoryStore::<User>::new();
        store.insert_one(User::new(1, "alice", "a@x.com")).await.unwrap();

        let err = store
            .insert_one(User::new(1, "mallory", "m@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Duplicate("1".to_string()));

        let kept = store.find_one(1).await.unwrap().unwrap();
        assert_eq!(kept.username, "alice");
    }

    #[tokio::test]
    async fn test_replace_only_touches_existing_records() {
        let store = InMemoryStore::with_records([User::new(4, "dave", "d@x.com")]);

        assert!(store.replace_one(User::new(4, "david", "dd@x.com")).await.unwrap());
        assert!(!store.replace_one(User::new(5, "eve", "e@x.com")).await.unwrap());

        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.find_one(4).await.unwrap(),
            Some(User::new(4, "david", "dd@x.com"))
        );
        assert_eq!(store.find_one(5).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_and_max_follow_id_order() {
        let store = InMemoryStore::with_records([
            User::new(9, "i", "i@x.com"),
            User::new(2, "b", "b@x.com"),
            User::new(5, "e", "e@x.com"),
        ]);

        let ids: Vec<u64> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.user_id)
            .collect();
        assert_eq!(ids, vec![2, 5, 9]);
        assert_eq!(store.max_id().await.unwrap(), Some(9));

        assert!(store.delete_one(9).await.unwrap());
        assert!(!store.delete_one(9).await.unwrap());
        assert_eq!(store.max_id().await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn test_empty_store_has_no_max() {
        let store = InMemoryStore::<User>::new();
        assert!(store.is_empty().await);
        assert_eq!(store.max_id().await.unwrap(), None);
    }
}
