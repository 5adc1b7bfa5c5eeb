//! Decorator Pattern
//!
//! This example stacks markup decorators around plain text.
//!
//! Run with: cargo run --example decorator

use switchboard::patterns::decorator::{Bold, Italic, PlainText, Text, Underline};

fn main() {
    let text = PlainText::new("Hello, world!");
    let formatted = Bold(Italic(Underline(text)));
    println!("{}", formatted.render());
}
