use reqwest::multipart::{Form, Part};
use reqwest::Method;
use shared_types::{AppError, MediaUploadResponse, MessageResponse};

use crate::http;

/// Upper bound enforced before any bytes leave the browser. The backend
/// would reject oversized files anyway, after the whole upload.
pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Size check shared with the upload page, which disables its submit
/// button on oversized picks instead of waiting for the request to fail.
pub fn check_upload_size(byte_len: usize) -> Result<(), AppError> {
    if byte_len == 0 {
        return Err(AppError::bad_request("File is empty"));
    }
    if byte_len > MAX_UPLOAD_BYTES {
        return Err(AppError::bad_request(
            "File is too large. The maximum upload size is 100 MB.",
        ));
    }
    Ok(())
}

/// Upload a media file and attach it to a course and, optionally, one of
/// its lessons.
pub async fn upload_media(
    file_name: String,
    mime_type: Option<&str>,
    bytes: Vec<u8>,
    course_id: i64,
    lesson_id: Option<i64>,
) -> Result<MediaUploadResponse, AppError> {
    check_upload_size(bytes.len())?;

    let mut part = Part::bytes(bytes).file_name(file_name);
    if let Some(mime) = mime_type {
        part = part
            .mime_str(mime)
            .map_err(|_| AppError::bad_request("Unrecognized file type"))?;
    }

    let mut form = Form::new()
        .part("file", part)
        .text("courseId", course_id.to_string());
    if let Some(lesson_id) = lesson_id {
        form = form.text("lessonId", lesson_id.to_string());
    }

    http::send_json(http::request(Method::POST, "/media/upload").multipart(form)).await
}

/// Remove an uploaded file by its public URL.
pub async fn delete_media(file_url: &str) -> Result<MessageResponse, AppError> {
    let builder =
        http::request(Method::DELETE, "/media/delete").query(&[("fileUrl", file_url)]);
    http::send_json(builder).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    #[test]
    fn rejects_empty_file() {
        let err = check_upload_size(0).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "File is empty");
    }

    #[test]
    fn rejects_oversized_file() {
        let err = check_upload_size(MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert!(err.message.contains("100 MB"));
    }

    #[test]
    fn accepts_boundary_size() {
        assert!(check_upload_size(MAX_UPLOAD_BYTES).is_ok());
        assert!(check_upload_size(1).is_ok());
    }
}
