//! Color tools

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "color";
const GRADIENT: &str = "from-fuchsia-500 to-purple-600";

pub fn color_tools() -> Vec<Tool> {
    vec![
        Tool::new("color-picker", "Color Picker", "Pick a color and copy it as HEX, RGB or HSL", CATEGORY, "M7 21a4 4 0 01-4-4V5", 55_712, GRADIENT)
            .with_features(&["HEX", "RGB", "HSL"]),
        Tool::new("hex-to-rgb", "HEX to RGB", "Convert hexadecimal colors to RGB values", CATEGORY, "M7 21a4 4 0 01-4-4", 31_067, GRADIENT),
        Tool::new("rgb-to-hex", "RGB to HEX", "Convert RGB values to hexadecimal colors", CATEGORY, "M7 21a4 4 0 01-4-4", 24_380, GRADIENT),
        Tool::new("color-palette-generator", "Color Palette Generator", "Generate harmonious palettes from a base color", CATEGORY, "M4 5a1 1 0 011-1h14", 27_544, "from-amber-400 to-pink-500"),
        Tool::new("gradient-generator", "Gradient Generator", "Design CSS gradients visually", CATEGORY, "M4 4h16v16", 19_833, "from-indigo-500 via-purple-500 to-pink-500"),
        Tool::new("contrast-checker", "Contrast Checker", "Check text contrast against WCAG guidelines", CATEGORY, "M12 3v18", 8_761, GRADIENT),
    ]
}
