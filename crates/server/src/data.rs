//! In-memory user store.

use std::collections::HashMap;

use chrono::NaiveDate;
use model::Username;
use tokio::sync::RwLock;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DataError {
    #[error("User not found")]
    UserNotFound,
}

/// Username to birth date mapping. The whole map is behind a single lock
/// as all store operations are short.
///
/// The store is not durable. All data is lost when the process exits.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<Username, NaiveDate>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the birth date for a username.
    pub async fn put(&self, username: Username, birthdate: NaiveDate) {
        self.users.write().await.insert(username, birthdate);
    }

    pub async fn birthdate(&self, username: &Username) -> Result<NaiveDate, DataError> {
        self.users
            .read()
            .await
            .get(username)
            .copied()
            .ok_or(DataError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username(text: &str) -> Username {
        Username::from_string(text.to_string()).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn get_missing_user_fails() {
        let store = UserStore::new();
        assert_eq!(
            store.birthdate(&username("unknownuser")).await,
            Err(DataError::UserNotFound)
        );
    }

    #[tokio::test]
    async fn put_and_get() {
        let store = UserStore::new();
        store.put(username("testuser"), date(1999, 10, 25)).await;
        assert_eq!(
            store.birthdate(&username("testuser")).await,
            Ok(date(1999, 10, 25))
        );
    }

    #[tokio::test]
    async fn put_overwrites_previous_value() {
        let store = UserStore::new();
        store.put(username("testuser"), date(1999, 10, 25)).await;
        store.put(username("testuser"), date(1995, 1, 1)).await;
        assert_eq!(
            store.birthdate(&username("testuser")).await,
            Ok(date(1995, 1, 1))
        );
    }
}
