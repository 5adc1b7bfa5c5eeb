//! Bridge Pattern
//!
//! This example draws the same shapes through two rendering backends.
//!
//! Run with: cargo run --example bridge

use std::sync::Arc;
use switchboard::patterns::bridge::{Circle, DrawingApi, Rectangle, Shape, V1DrawingApi, V2DrawingApi};

/// Section heading centred in a 50-column rule of `=`.
fn banner(title: &str) -> String {
    format!("{title:=^50}")
}

fn main() {
    println!("{}", banner("v1"));
    let v1: Arc<dyn DrawingApi> = Arc::new(V1DrawingApi);
    println!("{}", Circle::new(10, 20, 5, Arc::clone(&v1)).draw());
    println!("{}", Rectangle::new(30, 40, 10, 8, v1).draw());

    println!("{}", banner("v2"));
    let v2: Arc<dyn DrawingApi> = Arc::new(V2DrawingApi);
    println!("{}", Circle::new(100, 150, 25, Arc::clone(&v2)).draw());
    println!("{}", Rectangle::new(200, 250, 70, 40, v2).draw());
}
