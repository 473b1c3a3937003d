// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with *some* **content** and a [link](http://example.com).\n\n> Quoted text with `code`\n> continued lazily\n\n- Bullet point\n  - Nested item\n- Another item\n\n    fn example() {}\n\n[ref]: http://example.org \"Reference\"\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_quotes(depth: usize) -> String {
    let mut content = String::new();
    for level in 1..=depth {
        content.push_str(&"> ".repeat(level));
        content.push_str(&format!("Level {level} with _emphasis_ and [a ref][ref]\n"));
    }
    content.push_str("\n[ref]: /target\n");
    content
}

#[allow(dead_code)]
pub fn generate_span_heavy_paragraph(words: usize) -> String {
    let pieces = [
        "*one*",
        "**two**",
        "`three`",
        "[four](http://x.org)",
        "https://five.org",
        "\\*six\\*",
        "<me@seven.org>",
        "plain",
    ];
    (0..words)
        .map(|i| pieces[i % pieces.len()])
        .collect::<Vec<_>>()
        .join(" ")
}
