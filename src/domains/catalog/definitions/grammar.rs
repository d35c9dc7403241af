//! Grammar tools

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "grammar";
const GRADIENT: &str = "from-violet-500 to-indigo-700";

pub fn grammar_tools() -> Vec<Tool> {
    vec![
        Tool::new("grammar-checker", "Grammar Checker", "Find grammar mistakes and suggest fixes", CATEGORY, "M5 13l4 4L19 7", 97_114, GRADIENT)
            .with_features(&["Inline suggestions", "Explanations"]),
        Tool::new("spell-checker", "Spell Checker", "Highlight misspelled words as you type", CATEGORY, "M5 13l4 4L19 7", 51_809, GRADIENT),
        Tool::new("punctuation-checker", "Punctuation Checker", "Catch missing commas and stray punctuation", CATEGORY, "M12 19h.01", 13_276, GRADIENT),
        Tool::new("passive-voice-detector", "Passive Voice Detector", "Highlight passive constructions in text", CATEGORY, "M8 12h8", 6_584, GRADIENT),
    ]
}
