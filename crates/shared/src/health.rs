//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントが返すレスポンス型を提供する。

use serde::Serialize;

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`version` は Cargo.toml のバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use bincheck_shared::HealthResponse;
///
/// let response = HealthResponse {
///     status:  "alive".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(response.status, "alive");
/// ```
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// 稼働状態（常に `"alive"`）
    pub status:  String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsonシリアライズでstatusとversionが出力される() {
        let response = HealthResponse {
            status:  "alive".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "alive");
        assert_eq!(json["version"], "0.1.0");
    }
}
