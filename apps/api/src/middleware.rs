//! # ミドルウェア
//!
//! API サーバー用のミドルウェアを提供する。

mod api_key;

pub use api_key::{ApiKeyState, require_api_key};
