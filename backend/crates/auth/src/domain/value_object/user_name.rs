//! User Name Value Object
//!
//! ユーザー名はログインと表示に使う識別子。
//!
//! ## 設計方針
//! - 入力はそのまま保持する（大文字・小文字を区別、正規化しない）
//! - 一意性はストア側の UNIQUE 制約で保証する
//!
//! ## 不変条件
//! - 空白のみ・空文字は不可
//! - 長さ: 1〜64文字
//! - 制御文字を含まない

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum UserNameError {
    #[display("User name cannot be empty")]
    Empty,

    #[display("User name is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[display("User name contains a control character at position {position}")]
    ControlCharacter { position: usize },
}

impl std::error::Error for UserNameError {}

/// Validated user name, stored verbatim
#[derive(Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let value = input.into();
        Self::validate(&value)?;
        Ok(Self(value))
    }

    fn validate(value: &str) -> Result<(), UserNameError> {
        if value.trim().is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = value.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some(position) = value.chars().position(char::is_control) {
            return Err(UserNameError::ControlCharacter { position });
        }

        Ok(())
    }

    /// Create from database values (already unique and accepted once)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}
