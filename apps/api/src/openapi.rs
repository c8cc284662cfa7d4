//! # OpenAPI 仕様定義
//!
//! utoipa を使用して API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::{
    Modify,
    OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

use crate::handler::{bin, health};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "bincheck API",
      version = "0.1.0",
      description = "カード BIN 照会ゲートウェイ。上流の binlist.net への照会を仲介し、5 フィールドに射影して返す。"
   ),
   paths(
      // health
      health::health_check,
      // bin
      bin::lookup_bin,
   ),
   components(schemas(
      bincheck_shared::ErrorResponse,
      bincheck_shared::HealthResponse,
      bin::BinLookup,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "bin", description = "BIN 照会"),
   ),
   modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// セキュリティスキーム定義
///
/// `x-api-key` ヘッダーによる API キー認証を追加する。
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-api-key"))),
        );
    }
}
