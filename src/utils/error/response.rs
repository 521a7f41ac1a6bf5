//! HTTP response handling for errors

use super::types::ExporterError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};

impl ResponseError for ExporterError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExporterError::MetricNotFound(_) => StatusCode::NOT_FOUND,
            ExporterError::CommandTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_code = match self {
            ExporterError::CommandLaunch { .. }
            | ExporterError::CommandIo { .. }
            | ExporterError::CommandTimeout { .. } => "COMMAND_ERROR",
            ExporterError::StatParse { .. } => "PARSE_ERROR",
            ExporterError::MetricNotFound(_) => "METRIC_NOT_FOUND",
            ExporterError::Prometheus(_) => "ENCODING_ERROR",
            ExporterError::Config(_) => "CONFIG_ERROR",
            ExporterError::ExpositionStartup { .. }
            | ExporterError::Lifecycle(_)
            | ExporterError::Server(_) => "INTERNAL_ERROR",
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message: self.to_string(),
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail inside [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
