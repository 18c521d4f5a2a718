use crate::server::{error::AppError, model::user::GoogleProfile, service::user::UserService};
use test_utils::{builder::TestBuilder, factory};

mod find_or_create;
