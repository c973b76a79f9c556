use crate::errors::password_error::PasswordError;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{SaltString, rand_core::OsRng},
};

pub type UserId = String;

/// Longest password accepted, in bytes.
pub const MAX_PASSWORD_LENGTH: usize = 72;

// Memory cost in KiB, iterations, lanes
const HASH_PARAMS: (u32, u32, u32) = (4096, 1, 1);

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    name: String,
    password_hash: String,
}

impl User {
    pub fn new(name: &str, password: &str) -> Result<Self, PasswordError> {
        Ok(User {
            id: guid_create::GUID::rand().to_string().to_lowercase(),
            name: name.to_string(),
            password_hash: hash_password(password)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Only the user store renames users, so its name index stays in sync.
    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_password(&mut self, password: &str) -> Result<(), PasswordError> {
        self.password_hash = hash_password(password)?;
        Ok(())
    }

    pub fn password_is_valid(&self, password: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.password_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong {
            max: MAX_PASSWORD_LENGTH,
        });
    }

    let (m_cost, t_cost, p_cost) = HASH_PARAMS;
    let params = Params::new(m_cost, t_cost, p_cost, None)
        .map_err(|error| PasswordError::Hashing(error.to_string()))?;

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|error| PasswordError::Hashing(error.to_string()))
}
