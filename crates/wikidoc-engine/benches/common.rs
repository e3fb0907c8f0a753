// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wikidoc_content(size: usize) -> String {
    let base = "= Title\n\n== Section\n\nParagraph with *bold*, ~italic~ and {code} content.\nSee [the docs|Some::Module] or [http://example.com/].\n\n* Bullet point\n  continued here\n* Another item E<gt>\n\n0 First\n0 Second\n\n    fn example() {\n        println!(\"Hello\");\n    }\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_links(depth: usize) -> String {
    let mut s = String::from("*x*");
    for _ in 0..depth {
        s = format!("[{s}|target]");
    }
    s.push('\n');
    s
}

#[allow(dead_code)]
pub fn generate_unclosed_openers(count: usize) -> String {
    format!("{}\n", "a[b {c E<d ".repeat(count))
}
