pub mod timeres;
pub mod timestamp;
pub mod value;

pub use timeres::*;
pub use timestamp::*;
pub use value::*;
