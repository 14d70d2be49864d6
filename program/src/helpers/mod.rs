pub mod serialization;
pub mod utils;

pub use serialization::*;
pub use utils::*;
