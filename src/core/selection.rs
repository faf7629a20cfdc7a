use crate::core::element::ElementRecord;
use crate::core::registry::Registry;
use crate::error::{HelixError, HelixResult};

/// Maximum number of elements combined at once.
pub const MAX_SELECTION: usize = 4;

/// Ordered, duplicate-free list of up to four registry entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    elements: Vec<&'static ElementRecord>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from symbols in order. Duplicates and more than
    /// four entries are rejected.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> HelixResult<Self> {
        let mut set = Self::new();
        for symbol in symbols {
            let element = Registry::lookup(symbol.as_ref())?;
            if set.contains(element.symbol) {
                return Err(HelixError::DuplicateElement(element.symbol.to_string()));
            }
            set.push(element)?;
        }
        Ok(set)
    }

    fn push(&mut self, element: &'static ElementRecord) -> HelixResult<()> {
        if self.is_full() {
            return Err(HelixError::SelectionFull { capacity: MAX_SELECTION });
        }
        self.elements.push(element);
        Ok(())
    }

    /// Adds the element if absent, removes it if present.
    /// Returns `true` when the element ends up selected.
    pub fn toggle(&mut self, symbol: &str) -> HelixResult<bool> {
        let element = Registry::lookup(symbol)?;
        if let Some(idx) = self.elements.iter().position(|e| e.symbol == element.symbol) {
            self.elements.remove(idx);
            return Ok(false);
        }
        self.push(element)?;
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.iter().any(|e| e.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= MAX_SELECTION
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.elements.iter().map(|e| e.symbol).collect()
    }

    pub fn as_slice(&self) -> &[&'static ElementRecord] {
        &self.elements
    }
}
