//! Image tools

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "image";
const GRADIENT: &str = "from-pink-500 to-rose-600";

pub fn image_tools() -> Vec<Tool> {
    vec![
        Tool::new("image-resizer", "Image Resizer", "Resize images to exact pixel dimensions", CATEGORY, "M4 8V4h4M20 16v4h-4", 91_520, GRADIENT)
            .with_features(&["Keep aspect ratio", "Batch mode"]),
        Tool::new("image-compressor", "Image Compressor", "Shrink JPEG and PNG files without visible loss", CATEGORY, "M19 14l-7 7-7-7", 85_007, GRADIENT),
        Tool::new("image-cropper", "Image Cropper", "Crop images to a custom or preset ratio", CATEGORY, "M6 2v14h14", 47_660, GRADIENT),
        Tool::new("jpg-to-png", "JPG to PNG", "Convert JPG images to lossless PNG", CATEGORY, "M4 16l4-4 4 4", 52_198, GRADIENT),
        Tool::new("png-to-jpg", "PNG to JPG", "Convert PNG images to compact JPG", CATEGORY, "M4 16l4-4 4 4", 49_815, GRADIENT),
        Tool::new("image-to-base64", "Image to Base64", "Encode an image as a Base64 data URI", CATEGORY, "M10 20l4-16", 16_402, "from-zinc-500 to-slate-700"),
        Tool::new("favicon-generator", "Favicon Generator", "Create favicons in every size browsers expect", CATEGORY, "M5 3h14v14H5z", 13_944, GRADIENT),
    ]
}
