//! Developer tools: formatters, encoders, inspectors

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "developer";
const GRADIENT: &str = "from-zinc-600 to-neutral-800";

pub fn developer_tools() -> Vec<Tool> {
    vec![
        Tool::new("json-formatter", "JSON Formatter", "Pretty-print, minify and validate JSON", CATEGORY, "M8 9l-3 3 3 3", 118_902, GRADIENT)
            .with_features(&["Syntax errors with line numbers", "Tree view"]),
        Tool::new("base64-encoder", "Base64 Encoder", "Encode and decode Base64 strings", CATEGORY, "M10 20l4-16", 73_415, GRADIENT),
        Tool::new("url-encoder", "URL Encoder", "Percent-encode and decode URL components", CATEGORY, "M13.828 10.172a4 4 0 00-5.656 0", 45_268, GRADIENT),
        Tool::new("uuid-generator", "UUID Generator", "Generate random version 4 UUIDs in bulk", CATEGORY, "M7 20l4-16", 38_119, GRADIENT),
        Tool::new("hash-generator", "Hash Generator", "MD5, SHA-1 and SHA-256 digests of text", CATEGORY, "M7 20l4-16m2 16l4-16", 34_007, GRADIENT),
        Tool::new("regex-tester", "Regex Tester", "Test regular expressions against sample text", CATEGORY, "M9 5H7a2 2 0 00-2 2", 29_650, GRADIENT),
        Tool::new("jwt-decoder", "JWT Decoder", "Inspect header and payload of a JSON Web Token", CATEGORY, "M15 7a2 2 0 012 2", 21_873, GRADIENT),
        Tool::new("html-minifier", "HTML Minifier", "Strip whitespace and comments from HTML", CATEGORY, "M10 20l4-16", 9_905, GRADIENT),
    ]
}
