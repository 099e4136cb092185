use crate::server::{
    data::menu_option::MenuOptionRepository,
    model::menu::{CreateOptionParam, UpdateOptionParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
