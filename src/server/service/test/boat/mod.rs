use crate::{
    model::boat::BoatInputDto,
    server::{
        data::load::LoadRepository, error::AppError, model::boat::UpdateBoatParams,
        service::boat::BoatService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod name_available;
mod update;
