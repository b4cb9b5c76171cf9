use ghdata_test_utils::prelude::*;

use crate::server::data::issue::IssueRepository;

mod close_times;
