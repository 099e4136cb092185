//! Restaurant account domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::restaurant::{
    EditRestaurantInformationDto, PaginatedRestaurantsDto, RestaurantDto, RestaurantListItemDto,
    SignUpRestaurantDto,
};

/// Restaurant account with its public profile and credential hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Converts an entity model to a restaurant domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            name: entity.name,
            phone: entity.phone,
            address: entity.address,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    /// Converts to the owner-facing profile DTO. The password hash is dropped.
    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            r_id: self.id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            address: self.address,
            description: self.description,
            created_at: self.created_at,
        }
    }

    /// Converts to the directory entry shown to users.
    pub fn into_list_item_dto(self) -> RestaurantListItemDto {
        RestaurantListItemDto {
            r_id: self.id,
            name: self.name,
            address: self.address,
            description: self.description,
        }
    }
}

/// Page of restaurants for the user-facing directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedRestaurants {
    pub restaurants: Vec<Restaurant>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedRestaurants {
    pub fn into_dto(self) -> PaginatedRestaurantsDto {
        PaginatedRestaurantsDto {
            restaurants: self
                .restaurants
                .into_iter()
                .map(Restaurant::into_list_item_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for registering a new restaurant.
///
/// `password` is plaintext here; the service hashes it before it reaches the
/// repository as `password_hash`.
#[derive(Debug, Clone)]
pub struct SignUpRestaurantParam {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: Option<String>,
}

impl SignUpRestaurantParam {
    pub fn from_dto(dto: SignUpRestaurantDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
            phone: dto.phone,
            address: dto.address,
            description: dto.description,
        }
    }
}

/// Parameters for inserting a restaurant row.
#[derive(Debug, Clone)]
pub struct CreateRestaurantParam {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: Option<String>,
}

/// Partial update of a restaurant row. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRestaurantParam {
    pub id: i32,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl UpdateRestaurantParam {
    pub fn information(id: i32, dto: EditRestaurantInformationDto) -> Self {
        Self {
            id,
            name: dto.name,
            phone: dto.phone,
            description: dto.description,
            ..Default::default()
        }
    }

    pub fn address(id: i32, address: String) -> Self {
        Self {
            id,
            address: Some(address),
            ..Default::default()
        }
    }

    pub fn password_hash(id: i32, password_hash: String) -> Self {
        Self {
            id,
            password_hash: Some(password_hash),
            ..Default::default()
        }
    }
}
