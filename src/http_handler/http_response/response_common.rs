use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker for responses whose whole body deserializes into `Self`.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response)?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    fn unwrap_return_code(response: reqwest::Response) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer(status))
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(status))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// Everything that can go wrong between sending a request and holding its parsed body.
///
/// Callers of the polling pipeline do not distinguish between the variants,
/// they are kept apart for the log line only.
#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer(reqwest::StatusCode),
    BadRequest(reqwest::StatusCode),
    NoConnection,
    Timeout,
    MalformedBody,
    Unknown,
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() {
            ResponseError::MalformedBody
        } else if let Some(status) = value.status() {
            if status.is_server_error() {
                ResponseError::InternalServer(status)
            } else {
                ResponseError::BadRequest(status)
            }
        } else {
            ResponseError::Unknown
        }
    }
}
