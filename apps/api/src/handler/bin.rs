//! # BIN 照会ハンドラ
//!
//! パスパラメータの BIN を検証し、上流クライアントに照会を委譲して、
//! レスポンスを 5 フィールドの固定形に射影する。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use bincheck_shared::ErrorResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    client::{BinRecord, BinlistClient},
    error::{log_and_convert_binlist_error, validation_error_response},
};

/// BIN の最小桁数
const BIN_MIN_LEN: usize = 6;

/// BIN の最大桁数
const BIN_MAX_LEN: usize = 8;

/// BIN 照会ハンドラ用の State
pub struct BinState {
    pub binlist_client: Arc<dyn BinlistClient>,
}

/// 射影済みの BIN 照会結果
///
/// 上流レスポンスのうち 5 フィールドのみを返す。
/// 値が取れないフィールドも省略せず、常に null としてキーを出力する。
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BinLookup {
    /// カードブランド（上流 `scheme`）
    pub scheme: Option<String>,
    /// カード種別（上流 `type`）
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    /// 発行銀行名（上流 `bank.name`）
    pub bank: Option<String>,
    /// 発行国名（上流 `country.name`）
    pub country: Option<String>,
    /// プリペイドかどうか（上流 `prepaid`）
    pub prepaid: Option<bool>,
}

impl From<BinRecord> for BinLookup {
    fn from(record: BinRecord) -> Self {
        Self {
            scheme: record.scheme,
            card_type: record.card_type,
            bank: record.bank.and_then(|bank| bank.name),
            country: record.country.and_then(|country| country.name),
            prepaid: record.prepaid,
        }
    }
}

/// BIN が妥当な形式か（6〜8 桁の ASCII 数字のみ）
fn is_valid_bin(bin: &str) -> bool {
    (BIN_MIN_LEN..=BIN_MAX_LEN).contains(&bin.len())
        && bin.bytes().all(|byte| byte.is_ascii_digit())
}

/// BIN 照会エンドポイント
///
/// 形式が不正な場合は上流を呼ばずに 400 を返す（fail fast）。
#[utoipa::path(
   get,
   path = "/bin/{bin}",
   tag = "bin",
   params(
      ("bin" = String, Path, description = "カード BIN（6〜8 桁の数字）")
   ),
   responses(
      (status = 200, description = "照会成功", body = BinLookup),
      (status = 400, description = "BIN の形式が不正", body = ErrorResponse),
      (status = 401, description = "API キーが不正または欠落", body = ErrorResponse),
      (status = 404, description = "BIN が見つからない", body = ErrorResponse),
      (status = 503, description = "上流サービス利用不可", body = ErrorResponse),
   ),
   security(
      ("api_key" = [])
   )
)]
pub async fn lookup_bin(
    State(state): State<Arc<BinState>>,
    Path(bin): Path<String>,
) -> Response {
    if !is_valid_bin(&bin) {
        return validation_error_response("Invalid BIN format");
    }

    match state.binlist_client.lookup(&bin).await {
        Ok(record) => Json(BinLookup::from(record)).into_response(),
        Err(err) => log_and_convert_binlist_error("BIN 照会", err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::http::StatusCode;

    use super::*;
    use crate::client::{BankRecord, BinlistError, CountryRecord};

    // --- is_valid_bin テスト ---

    #[test]
    fn test_6から8桁の数字は妥当() {
        assert!(is_valid_bin("123456"));
        assert!(is_valid_bin("1234567"));
        assert!(is_valid_bin("12345678"));
    }

    #[test]
    fn test_桁数範囲外は不正() {
        assert!(!is_valid_bin(""));
        assert!(!is_valid_bin("12345"));
        assert!(!is_valid_bin("123456789"));
    }

    #[test]
    fn test_数字以外を含むと不正() {
        assert!(!is_valid_bin("12345a"));
        assert!(!is_valid_bin("12 456"));
        assert!(!is_valid_bin("1234.6"));
        assert!(!is_valid_bin("-23456"));
        // 全角数字も ASCII ではないため不正
        assert!(!is_valid_bin("１２３４５６"));
    }

    // --- 射影テスト ---

    #[test]
    fn test_全フィールドが射影される() {
        let record = BinRecord {
            scheme: Some("visa".to_string()),
            card_type: Some("debit".to_string()),
            bank: Some(BankRecord {
                name: Some("Acme".to_string()),
            }),
            country: Some(CountryRecord {
                name: Some("Chile".to_string()),
            }),
            prepaid: Some(false),
        };

        let lookup = BinLookup::from(record);

        assert_eq!(lookup.scheme.as_deref(), Some("visa"));
        assert_eq!(lookup.card_type.as_deref(), Some("debit"));
        assert_eq!(lookup.bank.as_deref(), Some("Acme"));
        assert_eq!(lookup.country.as_deref(), Some("Chile"));
        assert_eq!(lookup.prepaid, Some(false));
    }

    #[test]
    fn test_欠落フィールドはnoneに射影される() {
        let lookup = BinLookup::from(BinRecord::default());

        assert!(lookup.scheme.is_none());
        assert!(lookup.card_type.is_none());
        assert!(lookup.bank.is_none());
        assert!(lookup.country.is_none());
        assert!(lookup.prepaid.is_none());
    }

    #[test]
    fn test_bank_nameがnullなら射影もnone() {
        let record = BinRecord {
            bank: Some(BankRecord { name: None }),
            ..BinRecord::default()
        };

        let lookup = BinLookup::from(record);

        assert!(lookup.bank.is_none());
    }

    #[test]
    fn test_jsonシリアライズでnullキーも常に出力される() {
        let lookup = BinLookup::from(BinRecord::default());
        let json = serde_json::to_value(&lookup).unwrap();
        let object = json.as_object().unwrap();

        // 5 キーすべてが存在し、余分なキーはない
        assert_eq!(object.len(), 5);
        for key in ["scheme", "type", "bank", "country", "prepaid"] {
            assert!(object.get(key).unwrap().is_null(), "key {key} should be null");
        }
    }

    // --- lookup_bin テスト ---

    /// 呼び出し回数を記録するスタブクライアント
    struct CountingStubClient {
        calls: AtomicUsize,
    }

    impl CountingStubClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl BinlistClient for CountingStubClient {
        async fn lookup(&self, _bin: &str) -> Result<BinRecord, BinlistError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(BinRecord::default())
        }
    }

    #[tokio::test]
    async fn test_不正なbinは400を返し上流を呼ばない() {
        // Given
        let stub = CountingStubClient::new();
        let state = Arc::new(BinState {
            binlist_client: stub.clone(),
        });

        // When
        let response = lookup_bin(State(state), Path("12a45".to_string())).await;

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_妥当なbinは上流を一度だけ呼ぶ() {
        // Given
        let stub = CountingStubClient::new();
        let state = Arc::new(BinState {
            binlist_client: stub.clone(),
        });

        // When
        let response = lookup_bin(State(state), Path("123456".to_string())).await;

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }
}
