//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、上流照会はクライアントに委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `bin`: BIN 照会
//! - `docs`: API ドキュメント（Swagger UI / ReDoc / OpenAPI JSON）

pub mod bin;
pub mod docs;
pub mod health;

pub use bin::{BinLookup, BinState, lookup_bin};
pub use docs::{openapi_json, redoc, swagger_ui};
pub use health::health_check;
