//! Tool definitions, grouped by topic.
//!
//! Each topical module returns a plain list of [`Tool`] records. The lists are
//! maintained independently, so they are merged (and checked for duplicate
//! ids) by the registry rather than simply concatenated.
//!
//! ## Adding a New Tool
//!
//! 1. Add a `Tool::new(...)` entry to the matching topical module
//! 2. Pick an id that is unique across every module
//!
//! The route table picks up `/tools/<id>` automatically.

use super::tool::Tool;

mod calculation;
mod color;
mod conversion;
mod developer;
mod downloader;
mod grammar;
mod image;
mod pdf;
mod seo;
mod text;
mod writing;

pub use calculation::calculation_tools;
pub use color::color_tools;
pub use conversion::conversion_tools;
pub use developer::developer_tools;
pub use downloader::downloader_tools;
pub use grammar::grammar_tools;
pub use image::image_tools;
pub use pdf::pdf_tools;
pub use seo::seo_tools;
pub use text::text_tools;
pub use writing::writing_tools;

/// A named list of tools contributed by one topical module.
#[derive(Debug, Clone)]
pub struct ToolSource {
    pub name: &'static str,
    pub tools: Vec<Tool>,
}

impl ToolSource {
    pub fn new(name: &'static str, tools: Vec<Tool>) -> Self {
        Self { name, tools }
    }
}

/// All builtin sources in registration order.
pub fn builtin_sources() -> Vec<ToolSource> {
    vec![
        ToolSource::new("calculation", calculation_tools()),
        ToolSource::new("conversion", conversion_tools()),
        ToolSource::new("image", image_tools()),
        ToolSource::new("pdf", pdf_tools()),
        ToolSource::new("text", text_tools()),
        ToolSource::new("downloader", downloader_tools()),
        ToolSource::new("color", color_tools()),
        ToolSource::new("developer", developer_tools()),
        ToolSource::new("seo", seo_tools()),
        ToolSource::new("writing", writing_tools()),
        ToolSource::new("grammar", grammar_tools()),
    ]
}
