//! Writing tools

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "writing";
const GRADIENT: &str = "from-amber-500 to-yellow-600";

pub fn writing_tools() -> Vec<Tool> {
    vec![
        Tool::new("paraphrasing-tool", "Paraphrasing Tool", "Rephrase sentences while keeping their meaning", CATEGORY, "M15 3l6 6-12 12H3v-6z", 68_540, GRADIENT),
        Tool::new("essay-title-generator", "Essay Title Generator", "Suggest titles from a topic and tone", CATEGORY, "M4 6h16M4 12h16", 15_712, GRADIENT),
        Tool::new("text-summarizer", "Text Summarizer", "Condense long text into key sentences", CATEGORY, "M4 6h16M4 10h10", 42_336, GRADIENT)
            .with_features(&["Adjustable length", "Bullet output"]),
        Tool::new("readability-checker", "Readability Checker", "Flesch reading ease and grade level scores", CATEGORY, "M12 6.253v13", 11_021, GRADIENT),
        Tool::new("slogan-generator", "Slogan Generator", "Brainstorm catchy slogans for a brand", CATEGORY, "M11 5.882V19.24", 8_660, GRADIENT),
    ]
}
