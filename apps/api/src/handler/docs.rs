//! # API ドキュメントハンドラ
//!
//! - `/openapi.json` - utoipa が生成した OpenAPI 仕様
//! - `/docs` - Swagger UI（CDN 配信のアセットを埋め込んだ静的ページ）
//! - `/redoc` - ReDoc（同上）
//!
//! いずれも公開 allow-list に含まれるため API キーは不要。

use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// Swagger UI ページ
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>bincheck API - Swagger UI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: "/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

/// ReDoc ページ
const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>bincheck API - ReDoc</title>
</head>
<body>
  <redoc spec-url="/openapi.json"></redoc>
  <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

/// OpenAPI 仕様（JSON）を返す
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI ページを返す
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// ReDoc ページを返す
pub async fn redoc() -> Html<&'static str> {
    Html(REDOC_HTML)
}
