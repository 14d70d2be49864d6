pub mod bounded_str;   // BoundedStr<N>
pub mod property;      // Property account
pub mod property_data; // PropertyData + slot capacities

// Re-export the types so everyone can `use crate::state::{...}`.
pub use bounded_str::BoundedStr;
pub use property::Property;
pub use property_data::*;
