//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8000;

/// デフォルトの上流 BIN データベース URL
const DEFAULT_BINLIST_URL: &str = "https://lookup.binlist.net";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   /// 必須の環境変数が未設定
   #[error("環境変数 {0} が設定されていません")]
   Missing(&'static str),

   /// 必須の環境変数が空
   #[error("環境変数 {0} が空です")]
   Empty(&'static str),

   /// 環境変数の値が不正
   #[error("環境変数 {0} の値が不正です: {1}")]
   Invalid(&'static str, String),
}

/// API サーバーの設定
///
/// プロセス起動時に一度だけ構築し、以降は変更しない。
#[derive(Debug, Clone)]
pub struct AppConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// `x-api-key` ヘッダーと照合する共有シークレット
   pub api_key: String,
   /// 上流 BIN データベースのベース URL
   pub binlist_url: String,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   ///
   /// `API_KEY` が未設定または空の場合はエラーを返し、
   /// プロセスはリスナーをバインドする前に終了する。
   pub fn from_env() -> Result<Self, ConfigError> {
      let api_key = validate_api_key(env::var("API_KEY").ok())?;
      let port = parse_port(env::var("PORT").ok().as_deref())?;

      Ok(Self {
         host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
         port,
         api_key,
         binlist_url: env::var("BINLIST_URL")
            .unwrap_or_else(|_| DEFAULT_BINLIST_URL.to_string()),
      })
   }
}

/// `API_KEY` の値を検証する
///
/// 未設定・空文字・空白のみはすべて起動エラーとして扱う。
fn validate_api_key(value: Option<String>) -> Result<String, ConfigError> {
   let value = value.ok_or(ConfigError::Missing("API_KEY"))?;
   if value.trim().is_empty() {
      return Err(ConfigError::Empty("API_KEY"));
   }
   Ok(value)
}

/// `PORT` の値をパースする（未設定はデフォルト値）
fn parse_port(value: Option<&str>) -> Result<u16, ConfigError> {
   match value {
      None => Ok(DEFAULT_PORT),
      Some(raw) => raw
         .parse()
         .map_err(|_| ConfigError::Invalid("PORT", raw.to_string())),
   }
}

#[cfg(test)]
mod tests {
   // テスト間で環境変数の競合を避けるため、
   // 純粋なパース関数で検証する

   use super::*;

   #[test]
   fn test_api_key_未設定のときmissingエラー() {
      let result = validate_api_key(None);
      assert!(matches!(result, Err(ConfigError::Missing("API_KEY"))));
   }

   #[test]
   fn test_api_key_空文字のときemptyエラー() {
      let result = validate_api_key(Some(String::new()));
      assert!(matches!(result, Err(ConfigError::Empty("API_KEY"))));
   }

   #[test]
   fn test_api_key_空白のみのときemptyエラー() {
      let result = validate_api_key(Some("   ".to_string()));
      assert!(matches!(result, Err(ConfigError::Empty("API_KEY"))));
   }

   #[test]
   fn test_api_key_有効な値はそのまま返す() {
      let result = validate_api_key(Some("sekret".to_string()));
      assert_eq!(result.unwrap(), "sekret");
   }

   #[test]
   fn test_port_未設定のときデフォルト値() {
      assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
   }

   #[test]
   fn test_port_有効な値をパースする() {
      assert_eq!(parse_port(Some("13000")).unwrap(), 13000);
   }

   #[test]
   fn test_port_不正な値のときinvalidエラー() {
      let result = parse_port(Some("not-a-port"));
      assert!(matches!(result, Err(ConfigError::Invalid("PORT", _))));
   }
}
