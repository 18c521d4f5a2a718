use crate::server::{
    error::AppError,
    model::load::{CreateLoadParams, UpdateLoadParams},
    service::load::LoadService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod update;
