use matchbot_test_utils::prelude::*;

use crate::data::favorite::FavoriteRepository;

mod add;
