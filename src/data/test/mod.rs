use crate::data::{query::QueryArgs, repository::Repository};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_all;
mod get_first;
