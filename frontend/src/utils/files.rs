use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::{ApiError, Upload};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A picked image: the bytes to upload and an object URL for the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub upload: Upload,
    pub preview: String,
}

pub fn upload_from_parts(name: &str, mime: &str, bytes: Vec<u8>) -> Upload {
    let mime = mime.trim();
    Upload {
        file_name: name.to_string(),
        mime_type: if mime.is_empty() { FALLBACK_MIME } else { mime }.to_string(),
        bytes,
    }
}

/// First file of an `<input type="file">` change event.
pub fn first_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

pub async fn read_image(file: web_sys::File) -> Result<PickedImage, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Failed to read file"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview = web_sys::Url::create_object_url_with_blob(&file)
        .map_err(|_| ApiError::unknown("Failed to create object URL"))?;
    Ok(PickedImage {
        upload: upload_from_parts(&file.name(), &file.type_(), bytes),
        preview,
    })
}

pub fn release_preview(url: &str) {
    if url.starts_with("blob:") {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_mime_falls_back_to_octet_stream() {
        let upload = upload_from_parts("logo.png", "", vec![1, 2, 3]);
        assert_eq!(upload.mime_type, FALLBACK_MIME);
        assert_eq!(upload.bytes, vec![1, 2, 3]);
        let upload = upload_from_parts("cover.jpg", "image/jpeg", Vec::new());
        assert_eq!(upload.mime_type, "image/jpeg");
        assert_eq!(upload.file_name, "cover.jpg");
    }
}
