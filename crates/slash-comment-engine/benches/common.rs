// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title // heading note\n\nParagraph with some content. // aside\nSecond line of the paragraph.\n\n- Bullet point //todo\n- Another item\n\n> quoted text // remark\n\n| a // x | b |\n|---|---|\n| c | d // y |\n\n";
    base.repeat(size)
}
