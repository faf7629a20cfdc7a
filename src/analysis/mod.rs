pub mod bonds;
pub mod ionization;
pub mod spinor;
