//! Bridge: shapes delegate drawing to an interchangeable rendering API.

use std::sync::Arc;

/// Rendering backend a shape draws through.
pub trait DrawingApi: Send + Sync {
    fn draw_circle(&self, x: i32, y: i32, radius: u32) -> String;

    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct V1DrawingApi;

impl DrawingApi for V1DrawingApi {
    fn draw_circle(&self, x: i32, y: i32, radius: u32) -> String {
        format!("[V1] Circle at ({x},{y}) radius {radius}")
    }

    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String {
        format!("[V1] Rectangle at ({x},{y}) width {width} height {height}")
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct V2DrawingApi;

impl DrawingApi for V2DrawingApi {
    fn draw_circle(&self, x: i32, y: i32, radius: u32) -> String {
        format!("[V2] Smooth Circle at ({x},{y}) radius {radius}")
    }

    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String {
        format!("[V2] Filled Rectangle at ({x},{y}) width {width} height {height}")
    }
}

/// A shape that knows its geometry but not how to render it.
pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    x: i32,
    y: i32,
    radius: u32,
    api: Arc<dyn DrawingApi>,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: u32, api: Arc<dyn DrawingApi>) -> Self {
        Self { x, y, radius, api }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        self.api.draw_circle(self.x, self.y, self.radius)
    }
}

pub struct Rectangle {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    api: Arc<dyn DrawingApi>,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: u32, height: u32, api: Arc<dyn DrawingApi>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            api,
        }
    }
}

impl Shape for Rectangle {
    fn draw(&self) -> String {
        self.api.draw_rectangle(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_delegate_to_their_api() {
        let v1: Arc<dyn DrawingApi> = Arc::new(V1DrawingApi);
        let v2: Arc<dyn DrawingApi> = Arc::new(V2DrawingApi);

        assert_eq!(
            Circle::new(10, 20, 5, Arc::clone(&v1)).draw(),
            "[V1] Circle at (10,20) radius 5"
        );
        assert_eq!(
            Rectangle::new(30, 40, 10, 8, v1).draw(),
            "[V1] Rectangle at (30,40) width 10 height 8"
        );
        assert_eq!(
            Circle::new(100, 150, 25, Arc::clone(&v2)).draw(),
            "[V2] Smooth Circle at (100,150) radius 25"
        );
        assert_eq!(
            Rectangle::new(200, 250, 70, 40, v2).draw(),
            "[V2] Filled Rectangle at (200,250) width 70 height 40"
        );
    }
}
