/// Wall rectangles in page coordinates
pub mod layout;
/// Page rasterization
pub mod page;
