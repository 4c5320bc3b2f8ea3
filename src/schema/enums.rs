//! # Enum Value Tables
//!
//! A closed mapping between a finite set of symbolic constants and their
//! canonical external string representations. The canonical string, not the
//! symbol name, is what crosses the wire; lookup is exact-match and fails
//! explicitly on unknown input — no case folding, no partial matching, no
//! silent default.
//!
//! Tables are shared read-only (`Arc<EnumTable>`); an `EnumValue` is a
//! (table, ordinal) pair, so `canonical()` is total and allocation-free.

use hashbrown::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// One constant of a closed enum: internal symbol plus canonical external
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSymbol {
    name: String,
    canonical: String,
}

impl EnumSymbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

/// A named, closed, ordered set of enum symbols with exact-match lookup in
/// both directions.
#[derive(Debug)]
pub struct EnumTable {
    name: String,
    symbols: Vec<EnumSymbol>,
    by_canonical: HashMap<String, u16>,
    by_symbol: HashMap<String, u16>,
}

impl EnumTable {
    /// Builds a table from `(symbol, canonical string)` pairs. Declaration
    /// order is preserved and becomes the ordinal order.
    pub fn new<N, S, C>(name: N, symbols: impl IntoIterator<Item = (S, C)>) -> Result<Arc<Self>>
    where
        N: Into<String>,
        S: Into<String>,
        C: Into<String>,
    {
        let name = name.into();
        let symbols: Vec<EnumSymbol> = symbols
            .into_iter()
            .map(|(sym, canonical)| EnumSymbol {
                name: sym.into(),
                canonical: canonical.into(),
            })
            .collect();

        if symbols.is_empty() {
            return Err(Error::InvalidSchema {
                reason: format!("enum '{name}' declares no symbols"),
            });
        }
        if symbols.len() > u16::MAX as usize {
            return Err(Error::InvalidSchema {
                reason: format!("enum '{name}' declares {} symbols, limit is 65535", symbols.len()),
            });
        }

        let mut by_canonical = HashMap::with_capacity(symbols.len());
        let mut by_symbol = HashMap::with_capacity(symbols.len());
        for (ordinal, symbol) in symbols.iter().enumerate() {
            if by_symbol
                .insert(symbol.name.clone(), ordinal as u16)
                .is_some()
            {
                return Err(Error::InvalidSchema {
                    reason: format!("enum '{name}' declares duplicate symbol '{}'", symbol.name),
                });
            }
            if by_canonical
                .insert(symbol.canonical.clone(), ordinal as u16)
                .is_some()
            {
                return Err(Error::InvalidSchema {
                    reason: format!(
                        "enum '{name}' declares duplicate canonical string '{}'",
                        symbol.canonical
                    ),
                });
            }
        }

        Ok(Arc::new(Self {
            name,
            symbols,
            by_canonical,
            by_symbol,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[EnumSymbol] {
        &self.symbols
    }

    pub fn symbol(&self, ordinal: u16) -> Option<&EnumSymbol> {
        self.symbols.get(ordinal as usize)
    }

    /// Resolves a canonical external string to its constant. Exact match
    /// only; anything else fails with `UnrecognizedEnumValue`.
    pub fn from_canonical(self: &Arc<Self>, canonical: &str) -> Result<EnumValue> {
        match self.by_canonical.get(canonical) {
            Some(&ordinal) => Ok(EnumValue {
                table: Arc::clone(self),
                ordinal,
            }),
            None => Err(Error::UnrecognizedEnumValue {
                table: self.name.clone(),
                value: canonical.to_string(),
            }),
        }
    }

    /// Resolves an internal symbol name to its constant.
    pub fn by_symbol(self: &Arc<Self>, symbol: &str) -> Result<EnumValue> {
        match self.by_symbol.get(symbol) {
            Some(&ordinal) => Ok(EnumValue {
                table: Arc::clone(self),
                ordinal,
            }),
            None => Err(Error::UnrecognizedEnumValue {
                table: self.name.clone(),
                value: symbol.to_string(),
            }),
        }
    }
}

/// One constant of an enum table, cheap to clone and compare.
#[derive(Debug, Clone)]
pub struct EnumValue {
    table: Arc<EnumTable>,
    ordinal: u16,
}

impl EnumValue {
    pub fn ordinal(&self) -> u16 {
        self.ordinal
    }

    pub fn table(&self) -> &Arc<EnumTable> {
        &self.table
    }

    /// The canonical external string; total inverse of
    /// [`EnumTable::from_canonical`].
    pub fn canonical(&self) -> &str {
        &self.table.symbols[self.ordinal as usize].canonical
    }

    /// The internal symbol name.
    pub fn symbol(&self) -> &str {
        &self.table.symbols[self.ordinal as usize].name
    }

    pub(crate) fn is_of(&self, table: &Arc<EnumTable>) -> bool {
        Arc::ptr_eq(&self.table, table) || self.table.name == table.name
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal && self.table.name == other.table.name
    }
}

impl Eq for EnumValue {}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}
