//! Unit converters

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "conversion";
const GRADIENT: &str = "from-emerald-500 to-teal-600";

pub fn conversion_tools() -> Vec<Tool> {
    vec![
        Tool::new("length-converter", "Length Converter", "Convert between meters, feet, inches and miles", CATEGORY, "M4 8V4m0 0h4", 77_310, GRADIENT),
        Tool::new("weight-converter", "Weight Converter", "Convert kilograms, pounds, ounces and stones", CATEGORY, "M3 6l3 1m0 0l-3 9", 64_025, GRADIENT),
        Tool::new("temperature-converter", "Temperature Converter", "Celsius, Fahrenheit and Kelvin conversions", CATEGORY, "M12 9v3m0 0v3", 70_442, "from-orange-500 to-red-600")
            .with_features(&["Celsius", "Fahrenheit", "Kelvin"]),
        Tool::new("currency-converter", "Currency Converter", "Convert amounts between world currencies", CATEGORY, "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2", 130_774, "from-green-500 to-emerald-700"),
        Tool::new("time-zone-converter", "Time Zone Converter", "Compare times across cities and zones", CATEGORY, "M12 8v4l3 3", 41_090, GRADIENT),
        Tool::new("data-size-converter", "Data Size Converter", "Bytes, kilobytes, megabytes and beyond", CATEGORY, "M4 7v10c0 2 1 3 3 3h10", 22_871, GRADIENT),
        Tool::new("speed-converter", "Speed Converter", "km/h, mph, knots and meters per second", CATEGORY, "M13 10V3L4 14h7", 18_306, GRADIENT),
        Tool::new("area-converter", "Area Converter", "Square meters, acres, hectares and square feet", CATEGORY, "M4 4h16v16H4z", 20_554, GRADIENT),
    ]
}
