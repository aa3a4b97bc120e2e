//! Keypad symbols and their canonical frequency pairs.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One of the twelve keypad glyphs: `0`-`9`, `*` and `#`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    K1, K2, K3,
    K4, K5, K6,
    K7, K8, K9,
    Star, K0, Hash,
}

impl Symbol {
    /// Table order: digits 1-9, then 0, `*`, `#`.
    pub const ALL: [Symbol; 12] = [
        Symbol::K1, Symbol::K2, Symbol::K3,
        Symbol::K4, Symbol::K5, Symbol::K6,
        Symbol::K7, Symbol::K8, Symbol::K9,
        Symbol::K0, Symbol::Star, Symbol::Hash,
    ];

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::K1),
            '2' => Some(Self::K2),
            '3' => Some(Self::K3),
            '4' => Some(Self::K4),
            '5' => Some(Self::K5),
            '6' => Some(Self::K6),
            '7' => Some(Self::K7),
            '8' => Some(Self::K8),
            '9' => Some(Self::K9),
            '*' => Some(Self::Star),
            '0' => Some(Self::K0),
            '#' => Some(Self::Hash),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Self::K1 => '1', Self::K2 => '2', Self::K3 => '3',
            Self::K4 => '4', Self::K5 => '5', Self::K6 => '6',
            Self::K7 => '7', Self::K8 => '8', Self::K9 => '9',
            Self::Star => '*', Self::K0 => '0', Self::Hash => '#',
        }
    }

    pub fn frequencies(self) -> FrequencyPair {
        lookup(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Self::from_char(c).ok_or_else(|| Error::InvalidSymbol(c.to_string()))
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(Error::InvalidSymbol(s.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrequencyPair {
    pub low_hz: u16,
    pub high_hz: u16,
}

impl FrequencyPair {
    const fn new(low_hz: u16, high_hz: u16) -> Self {
        Self { low_hz, high_hz }
    }

    /// True when `a` and `b` land within `tolerance_hz` of this pair, in either order.
    pub fn matches(&self, a_hz: f64, b_hz: f64, tolerance_hz: f64) -> bool {
        let low = self.low_hz as f64;
        let high = self.high_hz as f64;
        let close = |observed: f64, expected: f64| (observed - expected).abs() <= tolerance_hz;

        (close(a_hz, low) && close(b_hz, high)) || (close(a_hz, high) && close(b_hz, low))
    }
}

pub const LOW_FREQUENCIES: [u16; 4] = [697, 770, 852, 941];
pub const HIGH_FREQUENCIES: [u16; 3] = [1209, 1336, 1477];

pub static FREQUENCY_TABLE: [(Symbol, FrequencyPair); 12] = [
    (Symbol::K1,   FrequencyPair::new(697, 1209)),
    (Symbol::K2,   FrequencyPair::new(697, 1336)),
    (Symbol::K3,   FrequencyPair::new(697, 1477)),
    (Symbol::K4,   FrequencyPair::new(770, 1209)),
    (Symbol::K5,   FrequencyPair::new(770, 1336)),
    (Symbol::K6,   FrequencyPair::new(770, 1477)),
    (Symbol::K7,   FrequencyPair::new(852, 1209)),
    (Symbol::K8,   FrequencyPair::new(852, 1336)),
    (Symbol::K9,   FrequencyPair::new(852, 1477)),
    (Symbol::K0,   FrequencyPair::new(941, 1336)),
    (Symbol::Star, FrequencyPair::new(941, 1209)),
    (Symbol::Hash, FrequencyPair::new(941, 1477)),
];

pub fn lookup(symbol: Symbol) -> FrequencyPair {
    match symbol {
        Symbol::K1 => FREQUENCY_TABLE[0].1,
        Symbol::K2 => FREQUENCY_TABLE[1].1,
        Symbol::K3 => FREQUENCY_TABLE[2].1,
        Symbol::K4 => FREQUENCY_TABLE[3].1,
        Symbol::K5 => FREQUENCY_TABLE[4].1,
        Symbol::K6 => FREQUENCY_TABLE[5].1,
        Symbol::K7 => FREQUENCY_TABLE[6].1,
        Symbol::K8 => FREQUENCY_TABLE[7].1,
        Symbol::K9 => FREQUENCY_TABLE[8].1,
        Symbol::K0 => FREQUENCY_TABLE[9].1,
        Symbol::Star => FREQUENCY_TABLE[10].1,
        Symbol::Hash => FREQUENCY_TABLE[11].1,
    }
}

pub fn lookup_glyph(glyph: &str) -> Result<FrequencyPair> {
    glyph.parse::<Symbol>().map(lookup)
}

/// Scans the table in order and returns the first symbol whose pair matches
/// `a_hz`/`b_hz` within `tolerance_hz`. Overlapping windows resolve to
/// whichever symbol comes first.
pub fn reverse_lookup(a_hz: f64, b_hz: f64, tolerance_hz: f64) -> Option<Symbol> {
    FREQUENCY_TABLE
        .iter()
        .find(|(_, pair)| pair.matches(a_hz, b_hz, tolerance_hz))
        .map(|(symbol, _)| *symbol)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_is_a_bijection() {
        let pairs: HashSet<_> = FREQUENCY_TABLE.iter().map(|(_, p)| *p).collect();
        assert_eq!(pairs.len(), FREQUENCY_TABLE.len());

        let symbols: HashSet<_> = FREQUENCY_TABLE.iter().map(|(s, _)| *s).collect();
        assert_eq!(symbols.len(), Symbol::ALL.len());

        for (symbol, pair) in &FREQUENCY_TABLE {
            assert!(LOW_FREQUENCIES.contains(&pair.low_hz));
            assert!(HIGH_FREQUENCIES.contains(&pair.high_hz));
            assert_eq!(lookup(*symbol), *pair);
        }
    }

    #[test]
    fn all_follows_table_order() {
        let table_order: Vec<_> = FREQUENCY_TABLE.iter().map(|(s, _)| *s).collect();
        assert_eq!(table_order, Symbol::ALL.to_vec());
    }

    #[test]
    fn char_conversions() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_char(symbol.to_char()), Some(symbol));
            assert_eq!(symbol.to_string().parse::<Symbol>(), Ok(symbol));
        }
        assert_eq!(Symbol::from_char('A'), None);
    }

    #[test]
    fn rejects_bad_glyphs() {
        for glyph in ["A", "", "10", "d", " 5"] {
            assert_eq!(glyph.parse::<Symbol>(), Err(Error::InvalidSymbol(glyph.to_string())));
            assert!(lookup_glyph(glyph).is_err());
        }
        assert_eq!(Symbol::try_from('x'), Err(Error::InvalidSymbol("x".into())));
    }

    #[test]
    fn lookup_known_pairs() {
        assert_eq!(lookup(Symbol::K5), FrequencyPair { low_hz: 770, high_hz: 1336 });
        assert_eq!(lookup(Symbol::K0), FrequencyPair { low_hz: 941, high_hz: 1336 });
        assert_eq!(lookup(Symbol::Star), FrequencyPair { low_hz: 941, high_hz: 1209 });
        assert_eq!(lookup_glyph("#"), Ok(FrequencyPair { low_hz: 941, high_hz: 1477 }));
    }

    #[test]
    fn reverse_lookup_either_order() {
        assert_eq!(reverse_lookup(770.0, 1336.0, 20.0), Some(Symbol::K5));
        assert_eq!(reverse_lookup(1336.0, 770.0, 20.0), Some(Symbol::K5));
        assert_eq!(reverse_lookup(1210.0, 940.0, 20.0), Some(Symbol::Star));
        assert_eq!(reverse_lookup(1210.0, 940.0, 0.0), None);
    }

    #[test]
    fn reverse_lookup_tolerance_is_absolute_on_both() {
        assert_eq!(reverse_lookup(790.0, 1316.0, 20.0), Some(Symbol::K5));
        assert_eq!(reverse_lookup(790.5, 1336.0, 20.0), None);
        assert_eq!(reverse_lookup(770.0, 1356.5, 20.0), None);
    }

    #[test]
    fn reverse_lookup_first_match_wins() {
        // Within 100 Hz of '1', '2' and '4'; '1' comes first.
        assert_eq!(reverse_lookup(733.0, 1272.0, 100.0), Some(Symbol::K1));
        assert_eq!(reverse_lookup(1272.0, 733.0, 100.0), Some(Symbol::K1));
    }
}
