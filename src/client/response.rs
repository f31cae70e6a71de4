// src/client/response.rs
// =============================================================================
// Turning an HTTP status + body into a typed value.
//
// Every Katana operation documents the same small status table:
//
//   success (usually 200)  -> the operation's output type
//   401                    -> ErrorResponse          (bad or missing API key)
//   422                    -> DetailedErrorResponse  (validation failed)
//   429                    -> ErrorResponse          (rate limited)
//   500                    -> ErrorResponse          (server fault)
//
// Anything else is "unexpected": an error when the client was built with
// raise_on_unexpected_status, otherwise Ok(None).
// =============================================================================

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{KatanaError, Result};
use crate::models::{DetailedErrorResponse, ErrorResponse};

/// Parsed body of a documented response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Ok(T),
    Unauthorized(ErrorResponse),
    UnprocessableEntity(DetailedErrorResponse),
    TooManyRequests(ErrorResponse),
    ServerError(ErrorResponse),
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResponse::Ok(_))
    }

    /// Success value, or the error payload folded into KatanaError::Api
    pub fn into_result(self, status: StatusCode) -> Result<T> {
        let message = match self {
            ApiResponse::Ok(value) => return Ok(value),
            ApiResponse::UnprocessableEntity(err) => err.summary(),
            ApiResponse::Unauthorized(err)
            | ApiResponse::TooManyRequests(err)
            | ApiResponse::ServerError(err) => err.message,
        };
        Err(KatanaError::Api { status, message })
    }
}

/// Everything about a response: the "detailed" call style
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub content: Vec<u8>,
    pub parsed: Option<ApiResponse<T>>,
}

impl<T> Response<T> {
    /// Decoded `X-Pagination` header, when the server sent one
    pub fn pagination(&self) -> Option<Pagination> {
        self.headers
            .get("x-pagination")
            .and_then(|v| v.to_str().ok())
            .and_then(Pagination::from_header)
    }

    pub fn into_result(self) -> Result<T> {
        match self.parsed {
            Some(parsed) => parsed.into_result(self.status),
            None => Err(KatanaError::UnexpectedStatus {
                status: self.status,
                content: self.content,
            }),
        }
    }
}

/// Page metadata from the `X-Pagination` header.
///
/// Katana sends every value as a string (`{"page":"1","last_page":"false"}`),
/// so each one is parsed leniently and missing/odd values become None.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub total_records: Option<u64>,
    pub total_pages: Option<u64>,
    pub offset: Option<u64>,
    pub page: Option<u64>,
    pub first_page: Option<bool>,
    pub last_page: Option<bool>,
}

impl Pagination {
    pub fn from_header(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        let map = value.as_object()?;

        let number = |key: &str| match map.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        let flag = |key: &str| match map.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };

        Some(Pagination {
            total_records: number("total_records"),
            total_pages: number("total_pages"),
            offset: number("offset"),
            page: number("page"),
            first_page: flag("first_page"),
            last_page: flag("last_page"),
        })
    }

    /// Some(true) when this is known to be the final page
    pub fn is_last_page(&self) -> Option<bool> {
        if let Some(last) = self.last_page {
            return Some(last);
        }
        match (self.page, self.total_pages) {
            (Some(page), Some(total)) => Some(page >= total),
            _ => None,
        }
    }
}

/// Status-code dispatch for one response
pub fn parse_response<T: DeserializeOwned>(
    status: StatusCode,
    success: StatusCode,
    content: &[u8],
    raise_on_unexpected_status: bool,
) -> Result<Option<ApiResponse<T>>> {
    let parsed = if status == success {
        ApiResponse::Ok(decode_body(content)?)
    } else {
        match status {
            StatusCode::UNAUTHORIZED => ApiResponse::Unauthorized(serde_json::from_slice(content)?),
            StatusCode::UNPROCESSABLE_ENTITY => {
                ApiResponse::UnprocessableEntity(serde_json::from_slice(content)?)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                ApiResponse::TooManyRequests(serde_json::from_slice(content)?)
            }
            StatusCode::INTERNAL_SERVER_ERROR => {
                ApiResponse::ServerError(serde_json::from_slice(content)?)
            }
            _ if raise_on_unexpected_status => {
                return Err(KatanaError::UnexpectedStatus {
                    status,
                    content: content.to_vec(),
                })
            }
            _ => return Ok(None),
        }
    };
    Ok(Some(parsed))
}

// 204s and some DELETEs come back with no body; decode those as JSON null so
// that `()` outputs work
fn decode_body<T: DeserializeOwned>(content: &[u8]) -> Result<T> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, ListResponse};
    use reqwest::header::HeaderValue;

    const ERROR_BODY: &[u8] =
        br#"{"statusCode":401,"name":"UnauthorizedError","message":"Unauthorized"}"#;

    #[test]
    fn test_success_status_decodes_output() {
        let body = br#"{"data":[{"id":1,"name":"Han"}]}"#;
        let parsed: Option<ApiResponse<ListResponse<Customer>>> =
            parse_response(StatusCode::OK, StatusCode::OK, body, false).unwrap();
        match parsed {
            Some(ApiResponse::Ok(list)) => assert_eq!(list.data[0].name, "Han"),
            other => panic!("expected Ok, got {:?}", other),
        }
    }

    #[test]
    fn test_documented_error_statuses() {
        let parsed: Option<ApiResponse<Value>> =
            parse_response(StatusCode::UNAUTHORIZED, StatusCode::OK, ERROR_BODY, false).unwrap();
        assert!(matches!(parsed, Some(ApiResponse::Unauthorized(_))));

        let parsed: Option<ApiResponse<Value>> =
            parse_response(StatusCode::TOO_MANY_REQUESTS, StatusCode::OK, ERROR_BODY, false)
                .unwrap();
        assert!(matches!(parsed, Some(ApiResponse::TooManyRequests(_))));

        let parsed: Option<ApiResponse<Value>> = parse_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::OK,
            ERROR_BODY,
            false,
        )
        .unwrap();
        assert!(matches!(parsed, Some(ApiResponse::ServerError(_))));

        let body = br#"{"statusCode":422,"name":"UnprocessableEntityError","message":"bad","details":[]}"#;
        let parsed: Option<ApiResponse<Value>> =
            parse_response(StatusCode::UNPROCESSABLE_ENTITY, StatusCode::OK, body, false).unwrap();
        assert!(matches!(parsed, Some(ApiResponse::UnprocessableEntity(_))));
    }

    #[test]
    fn test_unexpected_status_returns_none_by_default() {
        let parsed: Option<ApiResponse<Value>> =
            parse_response(StatusCode::NOT_FOUND, StatusCode::OK, b"nope", false).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_unexpected_status_raises_when_asked() {
        let err = parse_response::<Value>(StatusCode::NOT_FOUND, StatusCode::OK, b"nope", true)
            .unwrap_err();
        match err {
            KatanaError::UnexpectedStatus { status, content } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(content, b"nope");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_decodes_unit() {
        let parsed: Option<ApiResponse<()>> =
            parse_response(StatusCode::NO_CONTENT, StatusCode::NO_CONTENT, b"", false).unwrap();
        assert_eq!(parsed, Some(ApiResponse::Ok(())));
    }

    #[test]
    fn test_malformed_success_body_is_json_error() {
        let err = parse_response::<ListResponse<Customer>>(
            StatusCode::OK,
            StatusCode::OK,
            b"{not json",
            false,
        )
        .unwrap_err();
        assert!(matches!(err, KatanaError::Json(_)));
    }

    #[test]
    fn test_into_result_folds_error_payload() {
        let parsed: ApiResponse<Value> = ApiResponse::Unauthorized(
            serde_json::from_slice(ERROR_BODY).unwrap(),
        );
        let err = parsed.into_result(StatusCode::UNAUTHORIZED).unwrap_err();
        assert_eq!(err.to_string(), "Katana API error 401 Unauthorized: Unauthorized");
    }

    #[test]
    fn test_pagination_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-pagination",
            HeaderValue::from_static(
                r#"{"total_records":"120","total_pages":"3","offset":"50","page":"2","first_page":"false","last_page":"false"}"#,
            ),
        );
        let response: Response<Value> = Response {
            status: StatusCode::OK,
            headers,
            content: Vec::new(),
            parsed: None,
        };
        let pagination = response.pagination().unwrap();
        assert_eq!(pagination.total_records, Some(120));
        assert_eq!(pagination.page, Some(2));
        assert_eq!(pagination.is_last_page(), Some(false));
    }

    #[test]
    fn test_pagination_falls_back_to_page_count() {
        let pagination = Pagination::from_header(r#"{"page":3,"total_pages":3}"#).unwrap();
        assert_eq!(pagination.is_last_page(), Some(true));
        assert!(Pagination::from_header("not json").is_none());
    }
}
