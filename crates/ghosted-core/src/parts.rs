//! Multimodal message assembly.

use crate::error::CoreError;
use crate::message::{ContentPart, ImageUrl};

/// Assemble user-supplied text and image references into ordered content
/// parts.
///
/// Trimmed non-empty text becomes the first part; each image reference
/// becomes one part in input order, undeduplicated and unvalidated. Fails
/// when both the trimmed text and the image list are empty — the one
/// validation rule in the system.
pub fn build_multimodal_user_parts(
    text: &str,
    images: &[String],
) -> Result<Vec<ContentPart>, CoreError> {
    let mut parts = Vec::with_capacity(images.len() + 1);

    let trimmed = text.trim();
    if !trimmed.is_empty() {
        parts.push(ContentPart::Text {
            text: trimmed.to_string(),
        });
    }

    for url in images {
        parts.push(ContentPart::ImageUrl {
            image_url: ImageUrl { url: url.clone() },
        });
    }

    if parts.is_empty() {
        return Err(CoreError::EmptyMessage);
    }

    Ok(parts)
}
