//! Calculators: finance, health and everyday math

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "calculation";

pub fn calculation_tools() -> Vec<Tool> {
    vec![
        Tool::new("bmi-calculator", "BMI Calculator", "Calculate your Body Mass Index from height and weight", CATEGORY, "M12 4a4 4 0 110 8", 184_220, "from-blue-500 to-indigo-600")
            .with_features(&["Metric and imperial units", "Healthy range guide"]),
        Tool::new("tip-calculator", "Tip Calculator", "Work out the tip and split the bill between friends", CATEGORY, "M3 10h18M7 15h1", 96_410, "from-green-500 to-emerald-600")
            .with_features(&["Custom tip percentage", "Bill splitting"]),
        Tool::new("loan-calculator", "Loan Calculator", "Estimate monthly payments and total interest on a loan", CATEGORY, "M12 8c-1.657 0-3 .895-3 2", 121_305, "from-indigo-500 to-purple-600")
            .with_features(&["Amortization schedule", "Payment chart"]),
        Tool::new("mortgage-calculator", "Mortgage Calculator", "Plan home payments including taxes and insurance", CATEGORY, "M3 12l9-9 9 9", 143_870, "from-sky-500 to-blue-700"),
        Tool::new("compound-interest-calculator", "Compound Interest Calculator", "See how savings grow with compounding over time", CATEGORY, "M7 17l5-5 5 5", 88_012, "from-teal-500 to-cyan-600")
            .with_features(&["Monthly contributions", "Growth chart"]),
        Tool::new("age-calculator", "Age Calculator", "Find an exact age in years, months and days", CATEGORY, "M8 7V3m8 4V3", 172_554, "from-orange-500 to-amber-600"),
        Tool::new("percentage-calculator", "Percentage Calculator", "Percent of a number, percent change and ratios", CATEGORY, "M19 5L5 19", 110_980, "from-rose-500 to-pink-600"),
        Tool::new("bmr-calculator", "BMR Calculator", "Basal metabolic rate and daily calorie needs", CATEGORY, "M13 10V3L4 14h7v7", 45_302, "from-red-500 to-rose-600"),
        Tool::new("gpa-calculator", "GPA Calculator", "Compute grade point average from course grades", CATEGORY, "M12 14l9-5-9-5-9 5z", 39_874, "from-yellow-500 to-orange-600"),
        Tool::new("discount-calculator", "Discount Calculator", "Final price after a percentage discount", CATEGORY, "M7 7h.01M17 17h.01", 51_233, "from-lime-500 to-green-600"),
        Tool::new("salary-calculator", "Salary Calculator", "Convert between hourly, monthly and yearly pay", CATEGORY, "M17 9V7a2 2 0 00-2-2", 62_118, "from-emerald-500 to-green-700"),
        Tool::new("scientific-calculator", "Scientific Calculator", "Trigonometry, logarithms and powers in the browser", CATEGORY, "M9 7h6m0 10v-3", 98_440, "from-slate-500 to-gray-700"),
    ]
}
