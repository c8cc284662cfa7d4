//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! 各ハンドラとミドルウェアが共通で使うレスポンスヘルパーを集約する。
//! エラーボディはすべて RFC 9457 Problem Details 形式で、
//! `detail` に API 契約で定めたメッセージを載せる。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bincheck_shared::ErrorResponse;

use crate::client::BinlistError;

// --- IntoResponse for BinlistError ---

impl IntoResponse for BinlistError {
    fn into_response(self) -> Response {
        match self {
            BinlistError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(
                    "bin-not-found",
                    "BIN Not Found",
                    404,
                    "BIN not found",
                )),
            )
                .into_response(),
            BinlistError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::service_unavailable("External service error")),
            )
                .into_response(),
            BinlistError::Network(_) | BinlistError::Unexpected(_) => internal_error_response(),
        }
    }
}

/// binlist エラーをログ付きでレスポンスに変換する
///
/// `Network`/`Unexpected` エラーはコンテキスト付きで `tracing::error!` を、
/// `ServiceUnavailable` は `tracing::warn!` を出力する。
/// `NotFound` は `IntoResponse` でレスポンスに変換するのみ。
pub fn log_and_convert_binlist_error(context: &str, err: BinlistError) -> Response {
    match &err {
        BinlistError::Network(_) | BinlistError::Unexpected(_) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "binlist",
                "{}で内部エラー: {}",
                context,
                err
            );
        }
        BinlistError::ServiceUnavailable => {
            tracing::warn!(
                error.category = "external_service",
                error.kind = "binlist",
                "{}: 上流サービスに到達できません",
                context
            );
        }
        BinlistError::NotFound => {}
    }
    err.into_response()
}

// --- レスポンスヘルパー ---

/// 未認証レスポンス
pub fn unauthorized_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::unauthorized("Unauthorized")),
    )
        .into_response()
}

/// バリデーションエラーレスポンス
pub fn validation_error_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation_error(detail)),
    )
        .into_response()
}

/// 内部エラーレスポンス
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal_error()),
    )
        .into_response()
}
