pub mod response_common;
pub mod states_all;
