use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub const UPLOAD_PAGE_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Financial Statement Extractor</title>
</head>
<body>
  <h1>Financial Statement Extractor</h1>
  <p>Upload a financial PDF file to extract structured JSON data.</p>
  <form method="post" action="/api/v1/extract?download=true" enctype="multipart/form-data">
    <input type="file" name="file" accept="application/pdf" required>
    <button type="submit">Extract JSON</button>
  </form>
</body>
</html>
"#;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
