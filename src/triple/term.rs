//! RDF terms and their canonical pattern rendering
//!
//! The canonical pattern string is the N-Triples / SPARQL-Update spelling of a
//! term: `<iri>`, `"lexical"@lang` or `"lexical"^^<datatype>`. The same string
//! is used both as input to the content key and as the serialized `s`/`p`/`o`.

use std::fmt::Write;

/// How a literal is qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralTag {
    /// Language-tagged string (`"chat"@fr`)
    Language(String),
    /// Typed literal (`"1879-03-14"^^<xsd:date>`)
    Datatype(String),
}

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Resource { uri: String },
    Literal { value: String, tag: LiteralTag },
}

impl Term {
    pub fn resource(uri: impl Into<String>) -> Self {
        Self::Resource { uri: uri.into() }
    }

    pub fn language_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            tag: LiteralTag::Language(language.into()),
        }
    }

    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            tag: LiteralTag::Datatype(datatype.into()),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// Render the canonical pattern string for this term.
    pub fn to_pattern(&self) -> String {
        match self {
            Self::Resource { uri } => iri_pattern(uri),
            Self::Literal { value, tag } => {
                let mut out = String::with_capacity(value.len() + 8);
                out.push('"');
                escape_lexical(value, &mut out);
                out.push('"');
                match tag {
                    LiteralTag::Language(lang) => {
                        out.push('@');
                        out.push_str(lang);
                    }
                    LiteralTag::Datatype(datatype) => {
                        out.push_str("^^");
                        out.push_str(&iri_pattern(datatype));
                    }
                }
                out
            }
        }
    }
}

/// A subject–predicate–object statement. Subject and predicate are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }

    pub fn subject_pattern(&self) -> String {
        iri_pattern(&self.subject)
    }

    pub fn predicate_pattern(&self) -> String {
        iri_pattern(&self.predicate)
    }

    pub fn object_pattern(&self) -> String {
        self.object.to_pattern()
    }
}

fn iri_pattern(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len() + 2);
    out.push('<');
    for ch in iri.chars() {
        match ch {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => push_unicode_escape(ch, &mut out),
            c if c.is_control() || c.is_whitespace() => push_unicode_escape(c, &mut out),
            c => out.push(c),
        }
    }
    out.push('>');
    out
}

fn escape_lexical(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => push_unicode_escape(c, out),
            c => out.push(c),
        }
    }
}

fn push_unicode_escape(ch: char, out: &mut String) {
    let code = ch as u32;
    // Writing into a String cannot fail
    let _ = if code <= 0xFFFF {
        write!(out, "\\u{:04X}", code)
    } else {
        write!(out, "\\U{:08X}", code)
    };
}
