//! The three backend endpoints, all relative to the fixed demo origin.

use gloo_file::File as GlooFile;
use gloo_net::Error;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{BACKEND_ORIGIN, QueryResponse, TextQueryRequest, UploadResponse};

/// POST /upload — multipart form, field `image`.
pub async fn upload_image(file: &GlooFile) -> Result<UploadResponse, Error> {
    let request = Request::post(&format!("{BACKEND_ORIGIN}/upload")).body(multipart(file))?;
    parse(request.send().await?).await
}

/// POST /query_image — multipart form, field `image`.
pub async fn query_image(file: &GlooFile) -> Result<QueryResponse, Error> {
    let request = Request::post(&format!("{BACKEND_ORIGIN}/query_image")).body(multipart(file))?;
    parse(request.send().await?).await
}

/// POST /query_text — JSON body `{ "query": … }`.
pub async fn query_text(query: &str) -> Result<QueryResponse, Error> {
    let request = Request::post(&format!("{BACKEND_ORIGIN}/query_text"))
        .json(&TextQueryRequest { query: query.to_string() })?;
    parse(request.send().await?).await
}

fn multipart(file: &GlooFile) -> web_sys::FormData {
    let form_data = web_sys::FormData::new().expect("FormData unavailable");
    form_data
        .append_with_blob("image", file.as_ref())
        .expect("Failed to append image field.");
    form_data
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::GlooError(format!("Server error: {status} - {body}")));
    }
    response.json::<T>().await
}
