use serde::Serialize;
use std::fmt;

/// A residue as reported by the interaction tool: name, sequence number and chain label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResidueRef {
    pub name: String,
    pub number: i64,
    pub chain: String,
}

impl ResidueRef {
    pub fn new(name: &str, number: i64, chain: &str) -> Self {
        Self {
            name: name.to_string(),
            number,
            chain: chain.to_string(),
        }
    }

    /// Composite identifier of the form `<chain>-<name><number>`, e.g. `A-ARG12`.
    pub fn label(&self) -> String {
        format!("{}-{}{}", self.chain, self.name, self.number)
    }
}

impl fmt::Display for ResidueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Identity of a residue-residue contact. All six fields take part in equality,
/// and the pair is ordered: `(A, B)` and `(B, A)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResiduePairKey {
    pub first: ResidueRef,
    pub second: ResidueRef,
}

impl ResiduePairKey {
    pub fn new(first: ResidueRef, second: ResidueRef) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for ResiduePairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}
