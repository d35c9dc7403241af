//! SEO tools

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "seo";
const GRADIENT: &str = "from-lime-500 to-green-600";

pub fn seo_tools() -> Vec<Tool> {
    vec![
        Tool::new("meta-tag-generator", "Meta Tag Generator", "Generate title, description and social meta tags", CATEGORY, "M7 7h.01M7 3h5", 26_431, GRADIENT),
        Tool::new("keyword-density-checker", "Keyword Density Checker", "Measure how often keywords appear in a page", CATEGORY, "M9 19v-6a2 2 0 00-2-2", 17_208, GRADIENT),
        Tool::new("robots-txt-generator", "Robots.txt Generator", "Build a robots.txt file for crawlers", CATEGORY, "M9 3v2m6-2v2", 12_645, GRADIENT),
        Tool::new("sitemap-generator", "Sitemap Generator", "Create an XML sitemap from a list of URLs", CATEGORY, "M9 20l-5.447-2.724", 14_390, GRADIENT),
        Tool::new("serp-preview", "SERP Preview", "Preview how a page looks in search results", CATEGORY, "M21 21l-6-6", 7_523, GRADIENT),
    ]
}
