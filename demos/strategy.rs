//! Strategy Pattern
//!
//! This example swaps an editor's formatter at runtime.
//!
//! Run with: cargo run --example strategy

use switchboard::patterns::strategy::{
    HtmlFormatter, MarkdownFormatter, PlainTextFormatter, TextEditor,
};

fn main() {
    let message = "Hello, world!";

    let mut editor = TextEditor::new(PlainTextFormatter);
    println!("{}", editor.publish_text(message));

    editor.set_formatter(MarkdownFormatter);
    println!("{}", editor.publish_text(message));

    editor.set_formatter(HtmlFormatter);
    println!("{}", editor.publish_text(message));
}
