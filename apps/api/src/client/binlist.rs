//! # binlist.net クライアント
//!
//! 上流の公開 BIN/IIN データベースへの照会を担当する。
//!
//! ## エンドポイント
//!
//! - `GET {base_url}/{bin}` - BIN 照会
//!
//! 上流レスポンスのスキーマは保証されないため、全フィールドを
//! 任意として緩くデコードする。タイムアウトは 5 秒固定、リトライなし。

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// 上流照会のタイムアウト
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// binlist クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum BinlistError {
   /// BIN が見つからない（上流の非 200 応答はすべてここに畳み込む）
   #[error("BIN not found")]
   NotFound,

   /// 上流サービスに到達できない（接続エラー・タイムアウト・DNS 失敗）
   #[error("external service unavailable")]
   ServiceUnavailable,

   /// ネットワーク/デコードエラー
   #[error("network error: {0}")]
   Network(String),

   /// 予期しないエラー
   #[error("unexpected error: {0}")]
   Unexpected(String),
}

impl From<reqwest::Error> for BinlistError {
   fn from(err: reqwest::Error) -> Self {
      if err.is_connect() || err.is_timeout() {
         BinlistError::ServiceUnavailable
      } else {
         BinlistError::Network(err.to_string())
      }
   }
}

// --- レスポンス型 ---

/// 上流の発行銀行レコード
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankRecord {
   #[serde(default)]
   pub name: Option<String>,
}

/// 上流の発行国レコード
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryRecord {
   #[serde(default)]
   pub name: Option<String>,
}

/// 上流の BIN レコード
///
/// 外部所有のスキーマであり、どのフィールドも欠落しうる。
/// 未知のフィールドは無視し、欠落は `None` として扱う（デコード失敗にしない）。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BinRecord {
   #[serde(default)]
   pub scheme: Option<String>,

   #[serde(default, rename = "type")]
   pub card_type: Option<String>,

   #[serde(default)]
   pub bank: Option<BankRecord>,

   #[serde(default)]
   pub country: Option<CountryRecord>,

   #[serde(default)]
   pub prepaid: Option<bool>,
}

/// binlist クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait BinlistClient: Send + Sync {
   /// BIN を上流データベースに照会する
   async fn lookup(&self, bin: &str) -> Result<BinRecord, BinlistError>;
}

/// binlist クライアント実装
///
/// `reqwest::Client` は内部のコネクションプールを持ち、
/// 並行リクエスト間で安全に共有できる。
pub struct BinlistClientImpl {
   base_url: String,
   client:   reqwest::Client,
}

impl BinlistClientImpl {
   /// 新しい BinlistClient を作成する
   ///
   /// # 引数
   ///
   /// - `base_url`: 上流のベース URL（例: `https://lookup.binlist.net`）
   pub fn new(base_url: &str) -> Self {
      Self {
         base_url: base_url.trim_end_matches('/').to_string(),
         client:   reqwest::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .expect("reqwest クライアントの構築に失敗しました"),
      }
   }
}

#[async_trait]
impl BinlistClient for BinlistClientImpl {
   async fn lookup(&self, bin: &str) -> Result<BinRecord, BinlistError> {
      let url = format!("{}/{}", self.base_url, bin);
      let response = self.client.get(&url).send().await?;
      handle_response(response).await
   }
}

/// 上流レスポンスの共通ハンドリング
///
/// 200 以外のステータスは上流側のエラーコードを区別せず、
/// 一律 [`BinlistError::NotFound`] に畳み込む。
/// 200 のボディは [`BinRecord`] として緩くデコードする。
pub(super) async fn handle_response(
   response: reqwest::Response,
) -> Result<BinRecord, BinlistError> {
   if response.status() != reqwest::StatusCode::OK {
      return Err(BinlistError::NotFound);
   }

   let record = response.json::<BinRecord>().await?;
   Ok(record)
}
