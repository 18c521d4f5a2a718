use crate::server::{
    data::{boat::BoatRepository, load::LoadRepository},
    error::{relationship::RelationshipError, AppError},
    service::relationship::RelationshipService,
};
use sea_orm::ConnectionTrait;
use test_utils::{builder::TestBuilder, factory};

mod delete_boat;
mod delete_load;

/// Makes every update of a load fail, so the second write of a relationship change aborts.
const BLOCK_LOAD_UPDATES: &str = r#"CREATE TRIGGER block_load_update BEFORE UPDATE ON "load"
BEGIN
    SELECT RAISE(ABORT, 'load updates blocked');
END;"#;
