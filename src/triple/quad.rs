//! Quad: a triple as emitted by the extraction pipeline, tagged with its dataset

use super::term::{Term, Triple};
use super::xsd;
use serde::{Deserialize, Serialize};

/// One extracted statement, tagged with the logical dataset it belongs to.
///
/// `value` is either the literal's lexical form or, when no `datatype` is
/// present, the object IRI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quad {
    pub dataset: String,
    pub subject: String,
    pub predicate: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Quad {
    /// A quad whose object is a resource.
    pub fn resource(
        dataset: impl Into<String>,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object_uri: impl Into<String>,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            subject: subject.into(),
            predicate: predicate.into(),
            value: object_uri.into(),
            datatype: None,
            language: None,
        }
    }

    /// A quad whose object is a typed literal.
    pub fn literal(
        dataset: impl Into<String>,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        value: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            subject: subject.into(),
            predicate: predicate.into(),
            value: value.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Build the object term.
    ///
    /// - `xsd:string` datatype: language-tagged literal (quad language, else `default_language`)
    /// - any other datatype: typed literal carrying the datatype IRI verbatim
    /// - no datatype: resource; a language tag without a datatype is ignored
    pub fn object(&self, default_language: &str) -> Term {
        match self.datatype.as_deref() {
            Some(xsd::STRING) => Term::language_literal(
                self.value.clone(),
                self.language.as_deref().unwrap_or(default_language),
            ),
            Some(datatype) => Term::typed_literal(self.value.clone(), datatype),
            None => Term::resource(self.value.clone()),
        }
    }

    pub fn to_triple(&self, default_language: &str) -> Triple {
        Triple::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.object(default_language),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triple::LiteralTag;

    #[test]
    fn plain_string_gets_default_language() {
        let quad = Quad::literal("labels", "s", "p", "Albert Einstein", xsd::STRING);
        assert_eq!(quad.object("en"), Term::language_literal("Albert Einstein", "en"));
    }

    #[test]
    fn plain_string_prefers_quad_language() {
        let quad = Quad::literal("labels", "s", "p", "Albert Einstein", xsd::STRING).with_language("de");
        match quad.object("en") {
            Term::Literal { tag: LiteralTag::Language(lang), .. } => assert_eq!(lang, "de"),
            other => panic!("expected language literal, got {:?}", other),
        }
    }

    #[test]
    fn other_datatype_attached_verbatim() {
        let quad = Quad::literal("persondata", "s", "p", "1879-03-14", xsd::DATE).with_language("de");
        assert_eq!(quad.object("en"), Term::typed_literal("1879-03-14", xsd::DATE));
    }

    #[test]
    fn missing_datatype_is_resource() {
        let quad = Quad::resource("pagelinks", "s", "p", "http://dbpedia.org/resource/Ulm");
        assert_eq!(quad.object("en"), Term::resource("http://dbpedia.org/resource/Ulm"));
    }

    #[test]
    fn deserializes_from_json_line_without_optionals() {
        let json = r#"{"dataset":"pagelinks","subject":"s","predicate":"p","value":"o"}"#;
        let quad: Quad = serde_json::from_str(json).unwrap();
        assert_eq!(quad, Quad::resource("pagelinks", "s", "p", "o"));
    }
}
