//! # アプリケーション構築
//!
//! クライアント・State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use bincheck_api::{
    client::{BinlistClient, BinlistClientImpl},
    handler::{BinState, health_check, lookup_bin, openapi_json, redoc, swagger_ui},
    middleware::{ApiKeyState, require_api_key},
};
use bincheck_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;

/// クライアント → State → Router の順に組み立てる
pub(crate) fn build_app(config: &AppConfig) -> Router {
    let binlist_client: Arc<dyn BinlistClient> =
        Arc::new(BinlistClientImpl::new(&config.binlist_url));

    let bin_state = Arc::new(BinState { binlist_client });

    let api_key_state = ApiKeyState {
        api_key: config.api_key.clone(),
    };

    // API キーゲートは `route_layer` ではなく `layer` で適用する。
    // ルートに一致しないリクエストにもディスパッチ前にゲートを通すため。
    Router::new()
        .route("/", get(health_check))
        .route("/bin/{bin}", get(lookup_bin))
        .with_state(bin_state)
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(swagger_ui))
        .route("/redoc", get(redoc))
        .layer(from_fn_with_state(api_key_state, require_api_key))
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
