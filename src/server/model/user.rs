//! User account domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{SignUpUserDto, UserDto};

/// Ordering customer account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            nickname: entity.nickname,
            phone: entity.phone,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            u_id: self.id,
            email: self.email,
            nickname: self.nickname,
            phone: self.phone,
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a new user. `password` is plaintext.
#[derive(Debug, Clone)]
pub struct SignUpUserParam {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub phone: String,
}

impl SignUpUserParam {
    pub fn from_dto(dto: SignUpUserDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            nickname: dto.nickname,
            phone: dto.phone,
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub phone: String,
}
