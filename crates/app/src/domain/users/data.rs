//! User Data

use crate::domain::users::{errors::UsersServiceError, records::UserUuid};

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,

    /// SHA-256 hex digest of the user's API token.
    pub token_hash: String,
}

impl NewUser {
    pub(crate) fn normalised(self) -> Result<Self, UsersServiceError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        if name.is_empty() {
            return Err(UsersServiceError::InvalidInput("name must not be blank"));
        }

        if !email.contains('@') {
            return Err(UsersServiceError::InvalidInput("email must contain '@'"));
        }

        Ok(Self {
            name,
            email,
            ..self
        })
    }
}
