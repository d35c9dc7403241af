//! Text tools: counting, case changes, encodings

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "text";
const GRADIENT: &str = "from-slate-500 to-gray-700";

pub fn text_tools() -> Vec<Tool> {
    vec![
        Tool::new("word-counter", "Word Counter", "Count words, characters, sentences and paragraphs", CATEGORY, "M4 6h16M4 12h16", 152_873, GRADIENT)
            .with_features(&["Reading time", "Keyword density"]),
        Tool::new("case-converter", "Case Converter", "Switch text between upper, lower, title and sentence case", CATEGORY, "M4 6h16M4 12h8", 81_446, GRADIENT),
        Tool::new("rot13", "ROT13 Encoder", "Encode or decode text with the ROT13 cipher", CATEGORY, "M12 15v2m-6 4h12", 9_214, GRADIENT),
        Tool::new("text-reverser", "Text Reverser", "Reverse characters, words or lines", CATEGORY, "M7 16V4m0 0L3 8", 11_385, GRADIENT),
        Tool::new("remove-duplicate-lines", "Remove Duplicate Lines", "Delete repeated lines while keeping order", CATEGORY, "M19 7l-.867 12.142", 14_902, GRADIENT),
        Tool::new("lorem-ipsum-generator", "Lorem Ipsum Generator", "Placeholder paragraphs, sentences or words", CATEGORY, "M4 6h16M4 10h16", 37_651, GRADIENT),
        Tool::new("text-to-binary", "Text to Binary", "Convert text to binary and back", CATEGORY, "M10 20l4-16", 15_530, GRADIENT),
        Tool::new("character-counter", "Character Counter", "Count characters with and without spaces", CATEGORY, "M7 20l4-16m2 16l4-16", 44_019, GRADIENT),
    ]
}
