//! # API キー検証ミドルウェア
//!
//! 全リクエストに対してルートディスパッチの前に `x-api-key` ヘッダーを検証する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let api_key_state = ApiKeyState {
//!     api_key: config.api_key.clone(),
//! };
//!
//! Router::new()
//!     .route("/bin/{bin}", get(lookup_bin))
//!     .layer(from_fn_with_state(api_key_state, require_api_key))
//! ```

use axum::{
   body::Body,
   extract::State,
   http::Request,
   middleware::Next,
   response::Response,
};
use subtle::ConstantTimeEq;

use crate::error::unauthorized_response;

/// API キーを運ぶヘッダー名
const API_KEY_HEADER: &str = "x-api-key";

/// 認証を免除するパス（完全一致）
///
/// `/` を前方一致にすると全パスが公開になってしまうため、
/// ルートだけは完全一致で扱う。
const PUBLIC_EXACT_PATHS: &[&str] = &["/"];

/// 認証を免除するパス（前方一致）
const PUBLIC_PREFIX_PATHS: &[&str] = &["/docs", "/redoc", "/openapi.json"];

/// API キー検証ミドルウェアの状態
#[derive(Clone)]
pub struct ApiKeyState {
   pub api_key: String,
}

/// パスが公開 allow-list に含まれるか
fn is_public_path(path: &str) -> bool {
   PUBLIC_EXACT_PATHS.contains(&path)
      || PUBLIC_PREFIX_PATHS
         .iter()
         .any(|prefix| path.starts_with(prefix))
}

/// API キー検証ミドルウェア
///
/// 公開パスは無条件で通過させる。それ以外のパスでは `x-api-key` ヘッダーを
/// 設定済みシークレットと定数時間で比較し、不一致（ヘッダー欠落を含む）の
/// 場合は 401 Unauthorized を返してハンドラを実行しない。
pub async fn require_api_key(
   State(state): State<ApiKeyState>,
   request: Request<Body>,
   next: Next,
) -> Response {
   if is_public_path(request.uri().path()) {
      return next.run(request).await;
   }

   let authorized = request
      .headers()
      .get(API_KEY_HEADER)
      .and_then(|value| value.to_str().ok())
      .is_some_and(|value| bool::from(value.as_bytes().ct_eq(state.api_key.as_bytes())));

   if !authorized {
      return unauthorized_response();
   }

   next.run(request).await
}
