use crate::server::{
    data::load::LoadRepository,
    model::load::{Carrier, CreateLoadParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod clear_carrier;
mod create;
mod delete;
mod get_after;
mod rename_carrier;
mod set_carrier;
mod update_details;
