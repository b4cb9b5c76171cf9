use ghdata_test_utils::prelude::*;

use crate::server::data::project::ProjectRepository;
