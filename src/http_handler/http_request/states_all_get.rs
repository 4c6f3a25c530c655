use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use super::states_all::StatesAllResponse;

/// `GET /api/states/all`: anonymous snapshot of every state vector the network currently knows.
#[derive(Debug)]
pub struct StatesAllRequest {}

impl NoBodyHTTPRequestType for StatesAllRequest {}

impl HTTPRequestType for StatesAllRequest {
    type Response = StatesAllResponse;
    fn endpoint(&self) -> &str { "/api/states/all" }
}
