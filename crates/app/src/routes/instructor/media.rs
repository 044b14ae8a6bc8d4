use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, ToastOptions,
};

use api_client::api::media as media_api;
use shared_types::MediaUploadResponse;

use crate::routes::Route;

/// Media upload page for a course. Files are size-checked on pick and sent
/// as multipart form data.
#[component]
pub fn MediaUploadPage(id: i64) -> Element {
    let toast = use_toast();

    let mut file_name = use_signal(|| Option::<String>::None);
    let mut file_mime = use_signal(|| Option::<String>::None);
    let mut file_bytes = use_signal(|| Option::<Vec<u8>>::None);
    let mut uploading = use_signal(|| false);
    let mut last_upload = use_signal(|| Option::<MediaUploadResponse>::None);

    let mut clear_selection = move || {
        file_name.set(None);
        file_mime.set(None);
        file_bytes.set(None);
    };

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        let Some(f) = files.first() else {
            return;
        };
        let name = f.name();
        let mime = f.content_type().unwrap_or_else(|| mime_from_filename(&name));
        match f.read_bytes().await {
            Ok(bytes) => {
                if let Err(e) = media_api::check_upload_size(bytes.len()) {
                    toast.error(e.user_message(), ToastOptions::new());
                    return;
                }
                file_bytes.set(Some(bytes.to_vec()));
                file_mime.set(Some(mime));
                file_name.set(Some(name));
            }
            Err(_) => {
                toast.error("Failed to read file".to_string(), ToastOptions::new());
            }
        }
    };

    let handle_upload = move |_evt: MouseEvent| {
        if *uploading.read() {
            return;
        }
        let (Some(name), Some(bytes)) = (file_name.read().clone(), file_bytes.read().clone())
        else {
            toast.error("Please select a file to upload".to_string(), ToastOptions::new());
            return;
        };
        let mime = file_mime.read().clone();
        uploading.set(true);

        spawn(async move {
            let result =
                media_api::upload_media(name.clone(), mime.as_deref(), bytes, id, None).await;
            uploading.set(false);

            match result {
                Ok(response) => {
                    toast.success(format!("{name} uploaded successfully!"), ToastOptions::new());
                    last_upload.set(Some(response));
                    clear_selection();
                }
                Err(e) => {
                    toast.error(e.user_message(), ToastOptions::new());
                }
            }
        });
    };

    let selected = file_name.read().clone();
    let selected_size = file_bytes.read().as_ref().map(|b| b.len()).unwrap_or(0);
    let has_selection = selected.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./instructor.css") }
        div { class: "page-stack",
            PageHeader {
                div {
                    PageTitle { "Upload Media" }
                    PageSubtitle { "Upload images, videos, audio, or documents for your course lessons" }
                }
            }

            Card {
                CardContent {
                    form { onchange: handle_file,
                        label { class: "media-dropzone",
                            input {
                                r#type: "file",
                                class: "media-file-input",
                                disabled: *uploading.read(),
                                accept: ".jpg,.jpeg,.png,.gif,.webp,.mp4,.webm,.mov,.avi,.mp3,.wav,.ogg,.pdf,.doc,.docx,.ppt,.pptx",
                            }
                            span { class: "media-dropzone-cta", "Upload a file" }
                            p { class: "media-dropzone-hint",
                                "PNG, JPG, GIF, MP4, PDF, DOC, PPT up to 100MB"
                            }
                        }
                    }

                    if let Some(name) = selected {
                        div { class: "media-selected",
                            div {
                                h3 { "{name}" }
                                p { class: "media-selected-meta",
                                    "{format_file_size(selected_size)} \u{2022} {file_kind(&name).to_uppercase()}"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| clear_selection(),
                                "Remove"
                            }
                        }
                    }

                    if let Some(upload) = last_upload.read().as_ref() {
                        div { class: "media-uploaded",
                            span { "Uploaded: {upload.file_name}" }
                            a { href: "{upload.file_url}", target: "_blank", "{upload.file_url}" }
                        }
                    }

                    div { class: "form-actions",
                        button {
                            r#type: "button",
                            class: "button",
                            "data-style": "primary",
                            disabled: !has_selection || *uploading.read(),
                            onclick: handle_upload,
                            if *uploading.read() { "Uploading..." } else { "Upload Media" }
                        }
                        Link { to: Route::CourseDetail { id },
                            Button { variant: ButtonVariant::Secondary, "Back to Course" }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Supported Formats" }
                }
                CardContent {
                    div { class: "media-format-grid",
                        div { class: "media-format-cell",
                            div { class: "media-format-name", "Images" }
                            div { class: "media-format-exts", "JPG, PNG, GIF, WebP" }
                        }
                        div { class: "media-format-cell",
                            div { class: "media-format-name", "Videos" }
                            div { class: "media-format-exts", "MP4, WebM, MOV, AVI" }
                        }
                        div { class: "media-format-cell",
                            div { class: "media-format-name", "Audio" }
                            div { class: "media-format-exts", "MP3, WAV, OGG" }
                        }
                        div { class: "media-format-cell",
                            div { class: "media-format-name", "Documents" }
                            div { class: "media-format-exts", "PDF, DOC, PPT" }
                        }
                    }
                }
            }
        }
    }
}

/// Coarse media category from the file extension, shown next to the size.
fn file_kind(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "webp" => "image",
        "mp4" | "webm" | "mov" | "avi" => "video",
        "mp3" | "wav" | "ogg" => "audio",
        "pdf" | "doc" | "docx" | "ppt" | "pptx" => "document",
        _ => "other",
    }
}

fn format_file_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn mime_from_filename(name: &str) -> String {
    let lower = name.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf".to_string()
    } else if lower.ends_with(".mp4") {
        "video/mp4".to_string()
    } else if lower.ends_with(".webm") {
        "video/webm".to_string()
    } else if lower.ends_with(".mp3") {
        "audio/mpeg".to_string()
    } else if lower.ends_with(".wav") {
        "audio/wav".to_string()
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg".to_string()
    } else if lower.ends_with(".png") {
        "image/png".to_string()
    } else if lower.ends_with(".gif") {
        "image/gif".to_string()
    } else if lower.ends_with(".webp") {
        "image/webp".to_string()
    } else {
        "application/octet-stream".to_string()
    }
}
