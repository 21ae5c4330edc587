use serde::{Deserialize, Serialize};

use crate::contract::{CoreRequest, CoreResponse};
use crate::core_service::CatalogService;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    InvalidRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportResponse {
    Ok { response: CoreResponse },
    Err { error: ErrorResponse },
}

pub fn handle_request(service: &mut CatalogService, request: CoreRequest) -> TransportResponse {
    TransportResponse::Ok {
        response: service.handle_command(request),
    }
}

/// One request line in, one response line out. Payloads that are not JSON
/// report `invalid_json`; well-formed JSON that is not a known request
/// reports `invalid_request`.
pub fn handle_json(service: &mut CatalogService, payload: &str) -> String {
    let response = match serde_json::from_str::<serde_json::Value>(payload) {
        Err(error) => TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::InvalidJson,
                message: error.to_string(),
            },
        },
        Ok(value) => match serde_json::from_value::<CoreRequest>(value) {
            Err(error) => TransportResponse::Err {
                error: ErrorResponse {
                    code: ErrorCode::InvalidRequest,
                    message: error.to_string(),
                },
            },
            Ok(request) => handle_request(service, request),
        },
    };

    serde_json::to_string(&response).expect("transport response should serialize")
}
