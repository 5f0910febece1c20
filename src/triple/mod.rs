//! Triple data model: terms, quads, canonical patterns and content keys

mod key;
mod quad;
mod term;

pub use key::{ContentKey, HashKeyer};
pub use quad::Quad;
pub use term::{LiteralTag, Term, Triple};

/// Well-known datatype IRIs
pub mod xsd {
    /// The "plain string" marker: literals with this datatype carry a language tag instead
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}
