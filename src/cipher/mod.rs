pub mod dimensions;
pub mod matrix;
pub mod prepare;
pub mod substitute;
pub mod validate;

pub use dimensions::*;
pub use matrix::*;
pub use prepare::*;
pub use substitute::*;
pub use validate::*;
