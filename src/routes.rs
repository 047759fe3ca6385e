use std::collections::HashMap;

use worker::{Context, Env, Request, Response, Result, RouteContext, Router};

use crate::error::ApiError;
use crate::models::{DEFAULT_MAX_UPLOAD_BYTES, UPLOAD_PAGE_HTML};
use crate::upload;

#[derive(Debug, Clone)]
pub struct AppState {
    pub max_upload_bytes: usize,
}

pub async fn handle(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let max_upload_bytes = env
        .var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|value| value.to_string().parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

    let state = AppState { max_upload_bytes };

    Router::with_data(state)
        .get("/", upload_page_route)
        .post_async("/api/v1/extract", extract_route)
        .run(req, env)
        .await
}

fn upload_page_route(_req: Request, _ctx: RouteContext<AppState>) -> Result<Response> {
    Response::from_html(UPLOAD_PAGE_HTML)
}

async fn extract_route(req: Request, ctx: RouteContext<AppState>) -> Result<Response> {
    match extract_response(req, &ctx.data).await {
        Ok(response) => Ok(response),
        Err(error) => error.into_response(),
    }
}

async fn extract_response(mut req: Request, state: &AppState) -> Result<Response, ApiError> {
    let query = parse_query(&req)?;
    let download = parse_download_query(&query);

    let (bytes, upload_name) = upload::read_upload(&mut req).await?;
    upload::validate_upload(&bytes, state.max_upload_bytes)?;

    let (json, report) = upload::convert_pdf_bytes_to_json(&bytes)?;

    let mut response = Response::ok(json)?;
    response
        .headers_mut()
        .set("Content-Type", "application/json; charset=utf-8")?;
    response.headers_mut().set("Cache-Control", "no-store")?;
    response
        .headers_mut()
        .set("X-Quarter-Count", &report.quarter_count.to_string())?;
    response
        .headers_mut()
        .set("X-Table-Count", &report.table_count.to_string())?;

    if download {
        let filename = upload::json_attachment_filename(upload_name.as_deref());
        response.headers_mut().set(
            "Content-Disposition",
            &format!(
                "attachment; filename=\"{}\"",
                urlencoding::encode(&filename)
            ),
        )?;
    }

    Ok(response)
}

fn parse_query(req: &Request) -> Result<HashMap<String, String>, ApiError> {
    let url = req.url()?;
    let query = url
        .query_pairs()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>();
    Ok(query)
}

pub fn parse_download_query(query: &HashMap<String, String>) -> bool {
    query.get("download").is_some_and(|value| {
        let lowered = value.trim().to_ascii_lowercase();
        lowered == "true" || lowered == "1" || lowered == "yes"
    })
}
