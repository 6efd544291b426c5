mod color;

pub use color::{CircleColorList, Color, ColorResolver, create_colors};
