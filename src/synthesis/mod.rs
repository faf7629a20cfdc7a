pub mod compound;
pub mod properties;
