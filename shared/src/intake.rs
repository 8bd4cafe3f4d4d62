use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::str::FromStr;
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::cell::CellType;

const SVG_MIME: &str = "image/svg+xml";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{name} is not an image (content type: {content_type})")]
    InvalidInput { name: String, content_type: String },
    #[error("No sample image named {0}")]
    UnknownSample(String),
}

/// Where an image comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A dropped or picked file with the content type the browser declared.
    File {
        name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
    /// A preset sample, by catalog name.
    Sample(String),
}

/// Self-contained in-memory image: a base64 data URI plus identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    id: Uuid,
    name: String,
    mime_type: String,
    data_uri: String,
}

impl ImageHandle {
    fn encode(name: String, mime_type: String, bytes: &[u8]) -> Self {
        let data_uri = format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes));
        Self {
            id: Uuid::new_v4(),
            name,
            mime_type,
            data_uri,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

/// Names of the preset samples, catalog order.
pub fn sample_names() -> impl Iterator<Item = &'static str> {
    CellType::iter().map(<&'static str>::from)
}

/// Rejects a declared content type that is not `image/*`, including an empty one.
///
/// Only the declared type is checked, never the bytes.
pub fn check_content_type(name: &str, content_type: &str) -> Result<(), IntakeError> {
    let declared = content_type.trim();
    if is_image_type(declared) {
        Ok(())
    } else {
        Err(IntakeError::InvalidInput {
            name: name.to_string(),
            content_type: declared.to_string(),
        })
    }
}

/// Turns a source into an `ImageHandle`, hands it to `notify`, and returns it.
pub fn submit<F>(source: ImageSource, notify: F) -> Result<ImageHandle, IntakeError>
where
    F: FnOnce(&ImageHandle),
{
    let handle = match source {
        ImageSource::File {
            name,
            content_type,
            bytes,
        } => {
            check_content_type(&name, &content_type).inspect_err(|e| {
                log::warn!("Rejected upload: {}", e);
            })?;
            let mime_type = content_type.trim().to_ascii_lowercase();
            ImageHandle::encode(name, mime_type, &bytes)
        }
        ImageSource::Sample(name) => {
            let cell = CellType::from_str(&name).map_err(|_| IntakeError::UnknownSample(name))?;
            ImageHandle::encode(
                format!("{} sample", cell),
                SVG_MIME.to_string(),
                sample_svg(cell).as_bytes(),
            )
        }
    };

    log::info!("Accepted image {} ({})", handle.name(), handle.mime_type());
    notify(&handle);
    Ok(handle)
}

fn is_image_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().starts_with("image/")
}

fn sample_svg(cell: CellType) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100"><rect width="100" height="100" fill="#f3f4f6"/><text x="50" y="54" font-size="11" text-anchor="middle" fill="#6b7280">{}</text></svg>"##,
        cell
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::cell::RefCell;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn file(name: &str, content_type: &str, bytes: &[u8]) -> ImageSource {
        ImageSource::File {
            name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn image_file_becomes_data_uri() {
        let handle = submit(file("cell.png", "image/png", &PNG_MAGIC), |_| {}).unwrap();
        assert_eq!(handle.name(), "cell.png");
        assert_eq!(handle.mime_type(), "image/png");
        assert_eq!(
            handle.data_uri(),
            format!("data:image/png;base64,{}", STANDARD.encode(PNG_MAGIC))
        );
    }

    #[test]
    fn text_file_is_rejected() {
        let notified = RefCell::new(false);
        let err = submit(file("notes.txt", "text/plain", b"hello"), |_| {
            *notified.borrow_mut() = true;
        })
        .unwrap_err();

        assert_eq!(
            err,
            IntakeError::InvalidInput {
                name: "notes.txt".into(),
                content_type: "text/plain".into(),
            }
        );
        assert!(!*notified.borrow());
    }

    #[test]
    fn content_type_check_ignores_case() {
        assert!(check_content_type("a.JPG", "IMAGE/JPEG").is_ok());
        assert!(check_content_type("a.pdf", "application/pdf").is_err());
    }

    #[test]
    fn empty_content_type_fails_precheck() {
        assert!(check_content_type("scan", "").is_err());
        assert!(check_content_type("scan", "   ").is_err());
    }

    #[test]
    fn empty_content_type_is_rejected_even_for_image_bytes() {
        let notified = RefCell::new(false);
        let err = submit(file("scan", "", &PNG_MAGIC), |_| {
            *notified.borrow_mut() = true;
        })
        .unwrap_err();

        assert_eq!(
            err,
            IntakeError::InvalidInput {
                name: "scan".into(),
                content_type: String::new(),
            }
        );
        assert!(!*notified.borrow());
    }

    #[test]
    fn image_type_is_trusted_without_reading_bytes() {
        let handle = submit(file("cell.jpg", " Image/JPEG ", b"not really a jpeg"), |_| {}).unwrap();
        assert_eq!(handle.mime_type(), "image/jpeg");
    }

    #[test]
    fn observer_receives_returned_handle() {
        let seen = RefCell::new(None);
        let handle = submit(ImageSource::Sample("Neutrophil".into()), |h| {
            *seen.borrow_mut() = Some(h.clone());
        })
        .unwrap();
        assert_eq!(seen.into_inner(), Some(handle));
    }

    #[test]
    fn samples_are_self_contained_svgs() {
        for name in sample_names() {
            let handle = submit(ImageSource::Sample(name.to_string()), |_| {}).unwrap();
            assert_eq!(handle.mime_type(), "image/svg+xml");
            assert!(handle.data_uri().starts_with("data:image/svg+xml;base64,"));

            let payload = handle.data_uri().split_once(',').unwrap().1;
            let svg = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
            assert!(svg.contains(name));
        }
    }

    #[test]
    fn unknown_sample_is_an_error() {
        let err = submit(ImageSource::Sample("Basophil".into()), |_| {}).unwrap_err();
        assert_eq!(err, IntakeError::UnknownSample("Basophil".into()));
    }

    #[test]
    fn every_submit_gets_a_fresh_id() {
        let a = submit(ImageSource::Sample("Monocyte".into()), |_| {}).unwrap();
        let b = submit(ImageSource::Sample("Monocyte".into()), |_| {}).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.data_uri(), b.data_uri());
    }
}
