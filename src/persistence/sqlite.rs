use crate::framework::{RecordStore, StoreError};
use crate::model::{User, UserId};
use async_trait::async_trait;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    user_id  INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    email    TEXT NOT NULL
);";

/// Durable [`RecordStore`] for [`User`] records backed by a single SQLite file.
///
/// `user_id` is the primary key, so identifier lookups and `MAX(user_id)` are index reads.
/// Calls run on the blocking pool; the connection is serialized behind a mutex.
#[derive(Clone)]
pub struct SqliteUserStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteUserStore {
    /// Opens (or creates) the database at `path` and ensures the `users` table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(map_sqlite_error)?;
        info!(path = %path.display(), "Opened user store");
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database. Contents vanish with the store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(map_sqlite_error)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA).map_err(map_sqlite_error)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<R, F>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&Connection) -> Result<R, StoreError> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("store task failed: {e}")))?
    }
}

#[async_trait]
impl RecordStore<User> for SqliteUserStore {
    async fn insert_one(&self, record: User) -> Result<(), StoreError> {
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO users (user_id, username, email) VALUES (?1, ?2, ?3)",
                params![to_sql_id(record.user_id)?, record.username, record.email],
            )
            .map_err(map_sqlite_error)?;
            Ok(())
        })
        .await
    }

    async fn find_one(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let Some(sql_id) = stored_id(id) else {
            return Ok(None);
        };
        self.with_conn(move |conn| {
            let row = conn
                .query_row(
                    "SELECT user_id, username, email FROM users WHERE user_id = ?1",
                    params![sql_id],
                    |row| Ok((row.get::<_, i64>(0)?, row.get(1)?, row.get(2)?)),
                )
                .optional()
                .map_err(map_sqlite_error)?;
            row.map(decode_user).transpose()
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT user_id, username, email FROM users ORDER BY user_id")
                .map_err(map_sqlite_error)?;
            let rows = stmt
                .query_map([], |row| {
                    Ok((row.get::<_, i64>(0)?, row.get(1)?, row.get(2)?))
                })
                .map_err(map_sqlite_error)?;

            let mut users = Vec::new();
            for row in rows {
                users.push(decode_user(row.map_err(map_sqlite_error)?)?);
            }
            debug!(count = users.len(), "Loaded users");
            Ok(users)
        })
        .await
    }

    async fn replace_one(&self, record: User) -> Result<bool, StoreError> {
        let Some(sql_id) = stored_id(record.user_id) else {
            return Ok(false);
        };
        self.with_conn(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE users SET username = ?2, email = ?3 WHERE user_id = ?1",
                    params![sql_id, record.username, record.email],
                )
                .map_err(map_sqlite_error)?;
            Ok(changed > 0)
        })
        .await
    }

    async fn delete_one(&self, id: UserId) -> Result<bool, StoreError> {
        let Some(sql_id) = stored_id(id) else {
            return Ok(false);
        };
        self.with_conn(move |conn| {
            let removed = conn
                .execute("DELETE FROM users WHERE user_id = ?1", params![sql_id])
                .map_err(map_sqlite_error)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn max_id(&self) -> Result<Option<UserId>, StoreError> {
        self.with_conn(|conn| {
            let max: Option<i64> = conn
                .query_row("SELECT MAX(user_id) FROM users", [], |row| row.get(0))
                .map_err(map_sqlite_error)?;
            max.map(from_sql_id).transpose()
        })
        .await
    }
}

fn decode_user((user_id, username, email): (i64, String, String)) -> Result<User, StoreError> {
    Ok(User::new(from_sql_id(user_id)?, username, email))
}

/// Ids above `i64::MAX` cannot be stored, so no row carries them.
fn stored_id(id: UserId) -> Option<i64> {
    i64::try_from(id).ok()
}

fn to_sql_id(id: UserId) -> Result<i64, StoreError> {
    i64::try_from(id)
        .map_err(|_| StoreError::Unavailable(format!("user_id {id} exceeds SQLite integer range")))
}

fn from_sql_id(id: i64) -> Result<UserId, StoreError> {
    UserId::try_from(id).map_err(|_| StoreError::Corrupt(format!("negative user_id {id}")))
}

fn map_sqlite_error(error: rusqlite::Error) -> StoreError {
    match &error {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            StoreError::Duplicate(error.to_string())
        }
        rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..) => {
            StoreError::Corrupt(error.to_string())
        }
        _ => StoreError::Unavailable(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_crud_round_trip_in_memory() {
        let store = SqliteUserStore::open_in_memory().unwrap();
        assert_eq!(store.max_id().await.unwrap(), None);

        store.insert_one(User::new(1, "alice", "a@x.com")).await.unwrap();
        store.insert_one(User::new(2, "bob", "b@x.com")).await.unwrap();

        assert_eq!(
            store.find_one(2).await.unwrap(),
            Some(User::new(2, "bob", "b@x.com"))
        );
        assert_eq!(store.find_one(3).await.unwrap(), None);
        assert_eq!(store.find_all().await.unwrap().len(), 2);
        assert_eq!(store.max_id().await.unwrap(), Some(2));

        assert!(store.replace_one(User::new(2, "robert", "r@x.com")).await.unwrap());
        assert!(!store.replace_one(User::new(7, "ghost", "g@x.com")).await.unwrap());
        assert_eq!(store.find_one(2).await.unwrap().unwrap().username, "robert");

        assert!(store.delete_one(1).await.unwrap());
        assert!(!store.delete_one(1).await.unwrap());
        assert_eq!(store.find_all().await.unwrap(), vec![User::new(2, "robert", "r@x.com")]);
    }

    #[tokio::test]
    async fn test_duplicate_primary_key_is_reported() {
        let store = SqliteUserStore::open_in_memory().unwrap();
        store.insert_one(User::new(1, "alice", "a@x.com")).await.unwrap();

        let err = store
            .insert_one(User::new(1, "again", "again@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.db");

        {
            let store = SqliteUserStore::open(&path).unwrap();
            store.insert_one(User::new(5, "erin", "e@x.com")).await.unwrap();
            store.insert_one(User::new(8, "hank", "h@x.com")).await.unwrap();
        }

        let reopened = SqliteUserStore::open(&path).unwrap();
        assert_eq!(reopened.max_id().await.unwrap(), Some(8));
        assert_eq!(
            reopened.find_one(5).await.unwrap(),
            Some(User::new(5, "erin", "e@x.com"))
        );
    }

    #[tokio::test]
    async fn test_ids_beyond_sqlite_range_are_absent() {
        let store = SqliteUserStore::open_in_memory().unwrap();
        store.insert_one(User::new(1, "alice", "a@x.com")).await.unwrap();
        let huge = i64::MAX as u64 + 1;

        assert_eq!(store.find_one(huge).await.unwrap(), None);
        assert!(!store.replace_one(User::new(huge, "x", "x@x.com")).await.unwrap());
        assert!(!store.delete_one(u64::MAX).await.unwrap());
        assert!(matches!(
            store.insert_one(User::new(huge, "x", "x@x.com")).await,
            Err(StoreError::Unavailable(_))
        ));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[test]
    fn test_open_fails_for_unreachable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("nested").join("users.db");
        assert!(matches!(
            SqliteUserStore::open(path),
            Err(StoreError::Unavailable(_))
        ));
    }
}
