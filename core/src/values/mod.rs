mod display;
mod value;

pub use display::render;
pub use value::{ExprList, Value, ValueKind};
