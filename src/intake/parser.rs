use axum::http::HeaderMap;
use bytes::Bytes;

/// Text fields captured from the submission form.
#[derive(Debug, Default, Clone)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub location: String,
    pub template: String,
}

/// The uploaded video part, buffered in memory.
#[derive(Debug)]
pub struct VideoFile {
    pub content_type: String,
    pub data: Bytes,
}

/// Parse the multipart submission body using multer. The video part is the
/// caller's problem if absent; text fields default to empty.
pub async fn parse_submission(
    headers: &HeaderMap,
    body: Bytes,
) -> Result<(FormFields, Option<VideoFile>), String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut fields = FormFields::default();
    let mut video = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "video" {
            let content_type = field
                .content_type()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| format!("File read error: {e}"))?;
            video = Some(VideoFile { content_type, data });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        match name.as_str() {
            "name" => fields.name = value,
            "email" => fields.email = value,
            "company" => fields.company = value,
            "location" => fields.location = value,
            "template" => fields.template = value,
            _ => {}
        }
    }

    Ok((fields, video))
}
