use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de::Error};
use utoipa::ToSchema;

/// A username path parameter. The string must be non-empty and contain
/// only ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String)]
pub struct Username(String);

impl Username {
    /// Create a new Username with validation. Returns None if the string
    /// is empty or contains something else than ASCII letters.
    pub fn from_string(text: String) -> Option<Self> {
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(text))
        } else {
            None
        }
    }

    /// Get the username as a &str.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into a String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_string(s).ok_or_else(|| Error::custom("Username must be ASCII letters only"))
    }
}

/// Request body for storing a user's birthday.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct UserBirthday {
    /// Birth date in YYYY-MM-DD format.
    #[serde(rename = "dateOfBirth")]
    #[schema(value_type = String, example = "1990-10-30")]
    pub date_of_birth: NaiveDate,
}

/// Greeting response body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct GreetingMessage {
    pub message: String,
}

impl GreetingMessage {
    pub fn new(username: &Username, days_until_birthday: i64) -> Self {
        let message = if days_until_birthday == 0 {
            format!("Hello, {username}! Happy birthday!")
        } else {
            format!("Hello, {username}! Your birthday is in {days_until_birthday} day(s)")
        };
        Self { message }
    }
}
