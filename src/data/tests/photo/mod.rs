use matchbot_test_utils::prelude::*;

use crate::{data::photo::PhotoRepository, model::photo::PhotoDto};
