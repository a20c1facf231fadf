pub mod info;
pub mod matrix;
pub mod options;
pub mod pairs;
pub mod transform;

pub use info::*;
pub use matrix::*;
pub use options::*;
pub use pairs::*;
pub use transform::*;
