use crate::server::{
    data::task::TaskRepository,
    model::task::SaveTaskParam,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_id;
mod find_filtered;
