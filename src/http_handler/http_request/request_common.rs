use super::response_common::{HTTPResponseType, ResponseError};
use crate::http_handler::http_client::HTTPClient;
use crate::event;

/// Common interface of every typed request against the tracking API.
pub(crate) trait HTTPRequestType {
    /// The response type the request body is parsed into.
    type Response: HTTPResponseType;
    /// Endpoint path relative to the client's base URL, starting with `/`.
    fn endpoint(&self) -> &str;
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
}

/// Requests that carry neither a body nor query parameters, sent as plain `GET`.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let url = compose_url(client.url(), self.endpoint());
        event!("GET {url}");
        let response =
            client.client().get(url).headers(self.header_params()).send().await?;
        Self::Response::read_response(response).await
    }
}

/// Joins a base URL without trailing slash and an endpoint path.
pub(crate) fn compose_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{base_url}{endpoint}")
    } else {
        format!("{base_url}/{endpoint}")
    }
}
