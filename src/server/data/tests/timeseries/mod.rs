use ghdata_test_utils::prelude::*;

use crate::server::data::timeseries::{TimeseriesRepository, WeeklySource};

mod monthly_reopened_issues;
mod weekly_pulls;
