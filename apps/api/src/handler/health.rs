//! # ヘルスチェックハンドラ
//!
//! サービスの稼働状態を確認するためのエンドポイント。
//!
//! - `/` - Liveness Check（常に `"alive"` を返す）
//!
//! 公開 allow-list に含まれるため API キーは不要。
//! 上流 BIN データベースには依存しない。

use axum::Json;
use bincheck_shared::HealthResponse;

/// ヘルスチェックエンドポイント
#[utoipa::path(
   get,
   path = "/",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_checkはaliveを返す() {
        let Json(response) = health_check().await;

        assert_eq!(response.status, "alive");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
