use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub option_group_id: i32,
    pub name: String,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::option_group::Entity",
        from = "Column::OptionGroupId",
        to = "super::option_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    OptionGroup,
}

impl Related<super::option_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OptionGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
