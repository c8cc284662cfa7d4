//! # bincheck API サーバー
//!
//! カード BIN 照会ゲートウェイ。
//!
//! ## 役割
//!
//! クライアントからの BIN 照会を公開 BIN/IIN データベース（binlist.net）へ
//! 中継し、レスポンスを 5 フィールドに射影して返す。
//!
//! - **API キー認証**: 公開パス以外の全リクエストで `x-api-key` ヘッダーを検証
//! - **入力検証**: BIN は 6〜8 桁の数字のみ受け付ける
//! - **レスポンス射影**: 上流レスポンスから必要なフィールドだけを返す
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Client     │────▶│ bincheck API │────▶│ lookup.binlist.net│
//! │              │     │  port: 8000  │     │   (外部・非管理)  │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_KEY` | **Yes** | `x-api-key` ヘッダーと照合する共有シークレット（空は不可） |
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `BINLIST_URL` | No | 上流のベース URL（デフォルト: `https://lookup.binlist.net`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p bincheck-api
//!
//! # 本番環境（環境変数を直接指定）
//! API_KEY=... PORT=8000 cargo run -p bincheck-api --release
//! ```

mod app_builder;
mod config;

use std::net::SocketAddr;

use bincheck_shared::observability::TracingConfig;
use config::AppConfig;
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み（`API_KEY` 欠落はここで起動失敗）
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    bincheck_shared::observability::init_tracing(tracing_config);
    let _app_span = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み（API_KEY が未設定・空の場合はここで終了する）
    let config = AppConfig::from_env()?;

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    let app = app_builder::build_app(&config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
