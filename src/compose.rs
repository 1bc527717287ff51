//! Composite instruction-set assembly for the image-synthesis call
//!
//! Produces the ordered part sequence sent to the multimodal model. Order is
//! load-bearing: the first image part becomes "Subject A" and receives the
//! pixel-identical preservation constraint, the last image part becomes
//! "Subject B".

use crate::models::InlineImage;
use crate::prompts;

/// One unit of the composite instruction set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositePart {
    Text(String),
    Image { bytes: Vec<u8>, mime_type: String },
}

impl CompositePart {
    fn image(inline: &InlineImage) -> Self {
        Self::Image {
            bytes: inline.bytes.clone(),
            mime_type: inline.mime_type.clone(),
        }
    }
}

/// Build the ordered instruction set: `[instruction, (user image)?, reference]`.
///
/// Reference collapse: when no user photo was supplied, the reference
/// portrait is the only image part and therefore becomes "Subject A" - it
/// then receives the pixel-identical constraint intended for the user photo.
/// This mirrors the product behavior and is deliberately not special-cased.
pub fn build_instruction_set(
    user_image: Option<&InlineImage>,
    reference: &InlineImage,
) -> Vec<CompositePart> {
    let mut parts = vec![CompositePart::Text(
        prompts::COMPOSITE_INSTRUCTION.to_string(),
    )];

    if let Some(user) = user_image {
        parts.push(CompositePart::image(user));
    }

    parts.push(CompositePart::image(reference));
    parts
}
