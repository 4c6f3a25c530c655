use super::http_response::{response_common, states_all};

pub mod request_common;
pub mod states_all_get;
