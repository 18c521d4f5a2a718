use crate::server::{data::boat::BoatRepository, model::boat::CreateBoatParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_owner_after;
mod name_taken;
mod update_details;
