use finstmt_to_json::{ExtractOptions, ExtractionReport, extract_pdf_bytes_to_json_string};
use worker::{FormEntry, Request};

use crate::error::ApiError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Pulls the PDF out of the request: the `file` field of a multipart
/// form, or the raw body for direct POSTs.
pub async fn read_upload(req: &mut Request) -> Result<(Vec<u8>, Option<String>), ApiError> {
    let content_type = req
        .headers()
        .get("Content-Type")?
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let form = req.form_data().await?;
        let Some(entry) = form.get("file") else {
            return Err(ApiError::BadRequest(
                "multipart upload must carry a 'file' field".to_string(),
            ));
        };
        return match entry {
            FormEntry::File(file) => {
                let name = file.name();
                let bytes = file.bytes().await?;
                Ok((bytes, Some(name)))
            }
            FormEntry::Field(_) => Err(ApiError::BadRequest(
                "the 'file' field must be a file upload".to_string(),
            )),
        };
    }

    Ok((req.bytes().await?, None))
}

pub fn validate_upload(bytes: &[u8], max_upload_bytes: usize) -> Result<(), ApiError> {
    if bytes.is_empty() {
        return Err(ApiError::BadRequest(
            "request carried no PDF bytes".to_string(),
        ));
    }
    if bytes.len() > max_upload_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "upload exceeds the {max_upload_bytes}-byte limit"
        )));
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ApiError::BadRequest(
            "upload does not look like a PDF".to_string(),
        ));
    }
    Ok(())
}

pub fn convert_pdf_bytes_to_json(pdf_bytes: &[u8]) -> Result<(String, ExtractionReport), ApiError> {
    let (json, report) = extract_pdf_bytes_to_json_string(pdf_bytes, &ExtractOptions::default())
        .map_err(|error| ApiError::Parse(format!("failed to extract financial data: {error}")))?;

    worker::console_log!(
        "extraction completed: quarters={}, tables={}",
        report.quarter_count,
        report.table_count
    );

    Ok((json, report))
}

pub fn json_attachment_filename(upload_name: Option<&str>) -> String {
    let Some(name) = upload_name.map(str::trim).filter(|name| !name.is_empty()) else {
        return "financial-statements.json".to_string();
    };

    let stem = match name.rsplit_once('.') {
        Some((stem, extension)) if extension.eq_ignore_ascii_case("pdf") && !stem.is_empty() => {
            stem
        }
        _ => name,
    };
    format!("{stem}.json")
}
