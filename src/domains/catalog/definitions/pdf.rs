//! PDF tools

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "pdf";
const GRADIENT: &str = "from-red-500 to-orange-600";

pub fn pdf_tools() -> Vec<Tool> {
    vec![
        Tool::new("merge-pdf", "Merge PDF", "Combine several PDF files into one document", CATEGORY, "M8 7v8a2 2 0 002 2h6", 103_661, GRADIENT)
            .with_features(&["Drag to reorder", "No upload limit"]),
        Tool::new("split-pdf", "Split PDF", "Extract pages or ranges into separate files", CATEGORY, "M14.121 14.121L19 19", 58_730, GRADIENT),
        Tool::new("compress-pdf", "Compress PDF", "Reduce PDF file size for email and upload", CATEGORY, "M19 14l-7 7-7-7", 66_215, GRADIENT),
        Tool::new("pdf-to-word", "PDF to Word", "Turn PDF documents into editable DOCX files", CATEGORY, "M9 12h6m-6 4h6", 94_338, "from-blue-500 to-sky-600"),
        Tool::new("word-to-pdf", "Word to PDF", "Convert DOCX documents to PDF", CATEGORY, "M9 12h6m-6 4h6", 57_102, GRADIENT),
        Tool::new("pdf-to-jpg", "PDF to JPG", "Render each PDF page as a JPG image", CATEGORY, "M4 16l4-4 4 4", 33_490, GRADIENT),
        Tool::new("rotate-pdf", "Rotate PDF", "Rotate pages in a PDF permanently", CATEGORY, "M4 4v5h.582", 12_077, GRADIENT),
    ]
}
