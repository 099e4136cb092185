//! Menu tree domain models: categories, menus, option groups and options.

use crate::model::menu::{
    EditGroupDto, EditMenuDto, EditOptionDto, GroupDto, MenuCategoryDto, MenuDto, OptionDto,
    UploadGroupDto, UploadMenuDto, UploadMenuGroupDto, UploadMenuOptionDto, UploadOptionDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
}

impl MenuCategory {
    pub fn from_entity(entity: entity::menu_category::Model) -> Self {
        Self {
            id: entity.id,
            restaurant_id: entity.restaurant_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> MenuCategoryDto {
        MenuCategoryDto {
            mc_id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: i32,
    pub menu_category_id: i32,
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Menu {
    pub fn from_entity(entity: entity::menu::Model) -> Self {
        Self {
            id: entity.id,
            menu_category_id: entity.menu_category_id,
            name: entity.name,
            price: entity.price,
            description: entity.description,
            image: entity.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup {
    pub id: i32,
    pub menu_id: i32,
    pub name: String,
    /// Maximum number of options a customer may pick from this group.
    pub max_count: i32,
}

impl OptionGroup {
    pub fn from_entity(entity: entity::option_group::Model) -> Self {
        Self {
            id: entity.id,
            menu_id: entity.menu_id,
            name: entity.name,
            max_count: entity.max_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption {
    pub id: i32,
    pub option_group_id: i32,
    pub name: String,
    pub price: i32,
}

impl MenuOption {
    pub fn from_entity(entity: entity::menu_option::Model) -> Self {
        Self {
            id: entity.id,
            option_group_id: entity.option_group_id,
            name: entity.name,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> OptionDto {
        OptionDto {
            o_id: self.id,
            g_id: self.option_group_id,
            name: self.name,
            price: self.price,
        }
    }
}

/// Option group together with all of its options.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupWithOptions {
    pub group: OptionGroup,
    pub options: Vec<MenuOption>,
}

impl GroupWithOptions {
    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            g_id: self.group.id,
            m_id: self.group.menu_id,
            name: self.group.name,
            max_count: self.group.max_count,
            option: self.options.into_iter().map(MenuOption::into_dto).collect(),
        }
    }
}

/// Menu with its full group and option subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuWithGroups {
    pub menu: Menu,
    pub groups: Vec<GroupWithOptions>,
}

impl MenuWithGroups {
    pub fn into_dto(self) -> MenuDto {
        MenuDto {
            m_id: self.menu.id,
            mc_id: self.menu.menu_category_id,
            name: self.menu.name,
            price: self.menu.price,
            description: self.menu.description,
            image: self.menu.image,
            group: self
                .groups
                .into_iter()
                .map(GroupWithOptions::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuCategoryParam {
    pub restaurant_id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreateOptionParam {
    pub option_group_id: i32,
    pub name: String,
    pub price: i32,
}

impl CreateOptionParam {
    pub fn from_dto(dto: UploadOptionDto) -> Self {
        Self {
            option_group_id: dto.g_id,
            name: dto.name,
            price: dto.price,
        }
    }
}

/// Option nested in a group that is created in the same request.
#[derive(Debug, Clone)]
pub struct NewOption {
    pub name: String,
    pub price: i32,
}

impl NewOption {
    fn from_dto(dto: UploadMenuOptionDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub menu_id: i32,
    pub name: String,
    pub max_count: i32,
    pub options: Vec<NewOption>,
}

impl CreateGroupParam {
    pub fn from_dto(dto: UploadGroupDto) -> Self {
        Self {
            menu_id: dto.m_id,
            name: dto.name,
            max_count: dto.max_count,
            options: dto.option.into_iter().map(NewOption::from_dto).collect(),
        }
    }
}

/// Group nested in a menu that is created in the same request.
#[derive(Debug, Clone)]
pub struct NewGroup {
    pub name: String,
    pub max_count: i32,
    pub options: Vec<NewOption>,
}

impl NewGroup {
    fn from_dto(dto: UploadMenuGroupDto) -> Self {
        Self {
            name: dto.name,
            max_count: dto.max_count,
            options: dto
                .option
                .into_iter()
                .map(NewOption::from_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuParam {
    pub menu_category_id: i32,
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub groups: Vec<NewGroup>,
}

impl CreateMenuParam {
    pub fn from_dto(dto: UploadMenuDto) -> Self {
        Self {
            menu_category_id: dto.mc_id,
            name: dto.name,
            price: dto.price,
            description: dto.description,
            image: dto.image,
            groups: dto.group.into_iter().map(NewGroup::from_dto).collect(),
        }
    }
}

/// Partial menu update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateMenuParam {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl UpdateMenuParam {
    pub fn from_dto(dto: EditMenuDto) -> Self {
        Self {
            id: dto.m_id,
            name: dto.name,
            price: dto.price,
            description: dto.description,
            image: dto.image,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParam {
    pub id: i32,
    pub name: Option<String>,
    pub max_count: Option<i32>,
}

impl UpdateGroupParam {
    pub fn from_dto(dto: EditGroupDto) -> Self {
        Self {
            id: dto.g_id,
            name: dto.name,
            max_count: dto.max_count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateOptionParam {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<i32>,
}

impl UpdateOptionParam {
    pub fn from_dto(dto: EditOptionDto) -> Self {
        Self {
            id: dto.o_id,
            name: dto.name,
            price: dto.price,
        }
    }
}
