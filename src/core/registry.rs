use crate::core::element::{Block, ElementRecord, Group};
use crate::error::{HelixError, HelixResult};
use lazy_static::lazy_static;
use std::collections::HashMap;

use Block::{Noble, D, F, P, S};
use Group::{Actinide, Column, Lanthanide};

/// Number of records in the registry (H through Lr).
pub const ELEMENT_COUNT: usize = 103;

macro_rules! el {
    ($sym:expr, $z:expr, $period:expr, $group:expr, $block:expr, $name:expr, $a:expr, $sc:expr) => {
        ElementRecord::new($sym, $z, $period, $group, $block, $name, $a, $sc)
    };
}

/// Static element table, ordered by atomic number.
/// `A` values are observed first-ionization energies in eV.
pub static ELEMENTS: [ElementRecord; ELEMENT_COUNT] = [
    el!("H", 1, 1, Column(1), S, "Hydrogen", 13.598, false),
    el!("He", 2, 1, Column(18), Noble, "Helium", 24.587, false),
    // --- Period 2 ---
    el!("Li", 3, 2, Column(1), S, "Lithium", 5.392, false),
    el!("Be", 4, 2, Column(2), S, "Beryllium", 9.323, false),
    el!("B", 5, 2, Column(13), P, "Boron", 8.298, false),
    el!("C", 6, 2, Column(14), P, "Carbon", 11.260, false),
    el!("N", 7, 2, Column(15), P, "Nitrogen", 14.534, false),
    el!("O", 8, 2, Column(16), P, "Oxygen", 13.618, false),
    el!("F", 9, 2, Column(17), P, "Fluorine", 17.423, false),
    el!("Ne", 10, 2, Column(18), Noble, "Neon", 21.565, false),
    // --- Period 3 ---
    el!("Na", 11, 3, Column(1), S, "Sodium", 5.139, false),
    el!("Mg", 12, 3, Column(2), S, "Magnesium", 7.646, false),
    el!("Al", 13, 3, Column(13), P, "Aluminium", 5.986, true),
    el!("Si", 14, 3, Column(14), P, "Silicon", 8.152, false),
    el!("P", 15, 3, Column(15), P, "Phosphorus", 10.487, false),
    el!("S", 16, 3, Column(16), P, "Sulfur", 10.360, false),
    el!("Cl", 17, 3, Column(17), P, "Chlorine", 12.968, false),
    el!("Ar", 18, 3, Column(18), Noble, "Argon", 15.760, false),
    // --- Period 4 ---
    el!("K", 19, 4, Column(1), S, "Potassium", 4.341, false),
    el!("Ca", 20, 4, Column(2), S, "Calcium", 6.113, false),
    el!("Sc", 21, 4, Column(3), D, "Scandium", 6.561, false),
    el!("Ti", 22, 4, Column(4), D, "Titanium", 6.828, true),
    el!("V", 23, 4, Column(5), D, "Vanadium", 6.746, true),
    el!("Cr", 24, 4, Column(6), D, "Chromium", 6.767, false),
    el!("Mn", 25, 4, Column(7), D, "Manganese", 7.434, false),
    el!("Fe", 26, 4, Column(8), D, "Iron", 7.902, false),
    el!("Co", 27, 4, Column(9), D, "Cobalt", 7.881, false),
    el!("Ni", 28, 4, Column(10), D, "Nickel", 7.640, false),
    el!("Cu", 29, 4, Column(11), D, "Copper", 7.726, false),
    el!("Zn", 30, 4, Column(12), D, "Zinc", 9.394, true),
    el!("Ga", 31, 4, Column(13), P, "Gallium", 5.999, true),
    el!("Ge", 32, 4, Column(14), P, "Germanium", 7.900, false),
    el!("As", 33, 4, Column(15), P, "Arsenic", 9.789, false),
    el!("Se", 34, 4, Column(16), P, "Selenium", 9.752, false),
    el!("Br", 35, 4, Column(17), P, "Bromine", 11.814, false),
    el!("Kr", 36, 4, Column(18), Noble, "Krypton", 14.000, false),
    // --- Period 5 ---
    el!("Rb", 37, 5, Column(1), S, "Rubidium", 4.177, false),
    el!("Sr", 38, 5, Column(2), S, "Strontium", 5.695, false),
    el!("Y", 39, 5, Column(3), D, "Yttrium", 6.217, false),
    el!("Zr", 40, 5, Column(4), D, "Zirconium", 6.634, true),
    el!("Nb", 41, 5, Column(5), D, "Niobium", 6.759, true),
    el!("Mo", 42, 5, Column(6), D, "Molybdenum", 7.092, true),
    el!("Tc", 43, 5, Column(7), D, "Technetium", 7.280, true),
    el!("Ru", 44, 5, Column(8), D, "Ruthenium", 7.361, true),
    el!("Rh", 45, 5, Column(9), D, "Rhodium", 7.459, false),
    el!("Pd", 46, 5, Column(10), D, "Palladium", 8.337, false),
    el!("Ag", 47, 5, Column(11), D, "Silver", 7.576, false),
    el!("Cd", 48, 5, Column(12), D, "Cadmium", 8.994, true),
    el!("In", 49, 5, Column(13), P, "Indium", 5.786, true),
    el!("Sn", 50, 5, Column(14), P, "Tin", 7.344, true),
    el!("Sb", 51, 5, Column(15), P, "Antimony", 8.608, false),
    el!("Te", 52, 5, Column(16), P, "Tellurium", 9.010, false),
    el!("I", 53, 5, Column(17), P, "Iodine", 10.451, false),
    el!("Xe", 54, 5, Column(18), Noble, "Xenon", 12.130, false),
    // --- Period 6 ---
    el!("Cs", 55, 6, Column(1), S, "Caesium", 3.894, false),
    el!("Ba", 56, 6, Column(2), S, "Barium", 5.212, false),
    el!("La", 57, 6, Lanthanide, F, "Lanthanum", 5.577, true),
    el!("Ce", 58, 6, Lanthanide, F, "Cerium", 5.539, false),
    el!("Pr", 59, 6, Lanthanide, F, "Praseodymium", 5.473, false),
    el!("Nd", 60, 6, Lanthanide, F, "Neodymium", 5.525, false),
    el!("Pm", 61, 6, Lanthanide, F, "Promethium", 5.582, false),
    el!("Sm", 62, 6, Lanthanide, F, "Samarium", 5.644, false),
    el!("Eu", 63, 6, Lanthanide, F, "Europium", 5.670, false),
    el!("Gd", 64, 6, Lanthanide, F, "Gadolinium", 6.150, false),
    el!("Tb", 65, 6, Lanthanide, F, "Terbium", 5.864, false),
    el!("Dy", 66, 6, Lanthanide, F, "Dysprosium", 5.939, false),
    el!("Ho", 67, 6, Lanthanide, F, "Holmium", 6.022, false),
    el!("Er", 68, 6, Lanthanide, F, "Erbium", 6.108, false),
    el!("Tm", 69, 6, Lanthanide, F, "Thulium", 6.184, false),
    el!("Yb", 70, 6, Lanthanide, F, "Ytterbium", 6.254, false),
    el!("Lu", 71, 6, Column(3), D, "Lutetium", 5.426, false),
    el!("Hf", 72, 6, Column(4), D, "Hafnium", 6.825, true),
    el!("Ta", 73, 6, Column(5), D, "Tantalum", 7.550, true),
    el!("W", 74, 6, Column(6), D, "Tungsten", 7.864, true),
    el!("Re", 75, 6, Column(7), D, "Rhenium", 7.834, true),
    el!("Os", 76, 6, Column(8), D, "Osmium", 8.438, true),
    el!("Ir", 77, 6, Column(9), D, "Iridium", 8.967, true),
    el!("Pt", 78, 6, Column(10), D, "Platinum", 8.959, false),
    el!("Au", 79, 6, Column(11), D, "Gold", 9.226, false),
    el!("Hg", 80, 6, Column(12), D, "Mercury", 10.438, true),
    el!("Tl", 81, 6, Column(13), P, "Thallium", 6.108, true),
    el!("Pb", 82, 6, Column(14), P, "Lead", 7.417, true),
    el!("Bi", 83, 6, Column(15), P, "Bismuth", 7.286, false),
    el!("Po", 84, 6, Column(16), P, "Polonium", 8.414, false),
    el!("At", 85, 6, Column(17), P, "Astatine", 9.318, false),
    el!("Rn", 86, 6, Column(18), Noble, "Radon", 10.749, false),
    // --- Period 7 ---
    el!("Fr", 87, 7, Column(1), S, "Francium", 4.073, false),
    el!("Ra", 88, 7, Column(2), S, "Radium", 5.278, false),
    el!("Ac", 89, 7, Actinide, F, "Actinium", 5.380, false),
    el!("Th", 90, 7, Actinide, F, "Thorium", 6.307, true),
    el!("Pa", 91, 7, Actinide, F, "Protactinium", 5.890, true),
    el!("U", 92, 7, Actinide, F, "Uranium", 6.194, true),
    el!("Np", 93, 7, Actinide, F, "Neptunium", 6.266, false),
    el!("Pu", 94, 7, Actinide, F, "Plutonium", 6.026, false),
    el!("Am", 95, 7, Actinide, F, "Americium", 5.974, false),
    el!("Cm", 96, 7, Actinide, F, "Curium", 5.991, false),
    el!("Bk", 97, 7, Actinide, F, "Berkelium", 6.198, false),
    el!("Cf", 98, 7, Actinide, F, "Californium", 6.282, false),
    el!("Es", 99, 7, Actinide, F, "Einsteinium", 6.368, false),
    el!("Fm", 100, 7, Actinide, F, "Fermium", 6.500, false),
    el!("Md", 101, 7, Actinide, F, "Mendelevium", 6.580, false),
    el!("No", 102, 7, Actinide, F, "Nobelium", 6.626, false),
    el!("Lr", 103, 7, Column(3), D, "Lawrencium", 4.963, false),
];

lazy_static! {
    static ref BY_SYMBOL: HashMap<&'static str, &'static ElementRecord> =
        ELEMENTS.iter().map(|e| (e.symbol, e)).collect();
}

/// Read-only access to the element table.
pub struct Registry;

impl Registry {
    /// Looks up a record by its symbol (case-sensitive, e.g. "Fe").
    pub fn lookup(symbol: &str) -> HelixResult<&'static ElementRecord> {
        BY_SYMBOL
            .get(symbol)
            .copied()
            .ok_or_else(|| HelixError::UnknownElement(symbol.to_string()))
    }

    pub fn by_z(z: u32) -> HelixResult<&'static ElementRecord> {
        if z == 0 || z as usize > ELEMENT_COUNT {
            return Err(HelixError::UnknownAtomicNumber(z));
        }
        Ok(&ELEMENTS[z as usize - 1])
    }

    pub fn all() -> &'static [ElementRecord] {
        &ELEMENTS
    }

    pub fn period(period: u8) -> impl Iterator<Item = &'static ElementRecord> {
        ELEMENTS.iter().filter(move |e| e.period == period)
    }

    /// Resolves a symbol or an atomic number given as text ("Fe" or "26").
    pub fn find(token: &str) -> HelixResult<&'static ElementRecord> {
        match token.parse::<u32>() {
            Ok(z) => Self::by_z(z),
            Err(_) => Self::lookup(token),
        }
    }

    /// Resolves a list of symbols, keeping their order.
    pub fn resolve<T: AsRef<str>>(symbols: &[T]) -> HelixResult<Vec<&'static ElementRecord>> {
        symbols.iter().map(|s| Self::lookup(s.as_ref())).collect()
    }
}
