//! DTOs for the menu tree: categories, menus, option groups and options.
//!
//! Identifier fields keep the short wire names used by the API (`mc_id`,
//! `m_id`, `g_id`, `o_id`, `r_id`).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UploadMenuCategoryDto {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadMenuCategoryResDto {
    pub mc_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct EditMenuCategoryDto {
    pub mc_id: i32,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RemoveMenuCategoryDto {
    #[validate(length(min = 1))]
    pub mc_id: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuCategoryDto {
    pub mc_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct MenuCategoryListQuery {
    pub r_id: i32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct MenuListQuery {
    pub mc_id: i32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct GroupListQuery {
    pub m_id: i32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct OptionListQuery {
    pub g_id: i32,
}

/// Option embedded in a menu or option group upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UploadMenuOptionDto {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i32,
}

/// Option group embedded in a menu upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UploadMenuGroupDto {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 1))]
    pub max_count: i32,
    #[serde(default)]
    #[validate(nested)]
    pub option: Vec<UploadMenuOptionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UploadMenuDto {
    pub mc_id: i32,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub group: Vec<UploadMenuGroupDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadMenuResDto {
    pub m_id: i32,
}

/// Partial menu update; omitted fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct EditMenuDto {
    pub m_id: i32,
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RemoveMenuDto {
    #[validate(length(min = 1))]
    pub m_id: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuDto {
    pub m_id: i32,
    pub mc_id: i32,
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub group: Vec<GroupDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UploadGroupDto {
    pub m_id: i32,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 1))]
    pub max_count: i32,
    #[serde(default)]
    #[validate(nested)]
    pub option: Vec<UploadMenuOptionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadGroupResDto {
    pub g_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct EditGroupDto {
    pub g_id: i32,
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub max_count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RemoveGroupDto {
    #[validate(length(min = 1))]
    pub g_id: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub g_id: i32,
    pub m_id: i32,
    pub name: String,
    pub max_count: i32,
    pub option: Vec<OptionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UploadOptionDto {
    pub g_id: i32,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadOptionResDto {
    pub o_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct EditOptionDto {
    pub o_id: i32,
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RemoveOptionDto {
    #[validate(length(min = 1))]
    pub o_id: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OptionDto {
    pub o_id: i32,
    pub g_id: i32,
    pub name: String,
    pub price: i32,
}
