//! # bincheck API ライブラリ
//!
//! カード BIN 照会ゲートウェイのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `client`: 上流 BIN データベース（binlist.net）クライアント
//! - `error`: エラーレスポンス変換とヘルパー
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（API キー検証）
//! - `openapi`: OpenAPI 仕様定義

pub mod client;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
