use matchbot_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::{data::user::UserRepository, model::user::SearchFilters};

mod get_cursor;
mod update_cursor;
mod update_filters;
mod update_token;
