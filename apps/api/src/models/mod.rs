pub mod catalog;
pub mod feature;
pub mod keyed;
