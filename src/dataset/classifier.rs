//! Static dataset → consumer identity table

use serde::{Deserialize, Serialize};

/// Identity of the downstream consumer owning a dataset (an extractor class name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumerId(String);

impl ConsumerId {
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConsumerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConsumerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The known datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Labels,
    LinksToWikipediaArticle,
    InfoboxProperties,
    InfoboxPropertyDefinitions,
    PageLinks,
    GeoCoordinates,
    CategoryLabels,
    ArticleCategories,
    ExternalLinks,
    Homepages,
    DisambiguationLinks,
    Persondata,
    Pnd,
    SkosCategories,
    Redirects,
    PageIds,
    LongAbstracts,
    ShortAbstracts,
    Revisions,
}

impl Dataset {
    pub const ALL: [Dataset; 19] = [
        Dataset::Labels,
        Dataset::LinksToWikipediaArticle,
        Dataset::InfoboxProperties,
        Dataset::InfoboxPropertyDefinitions,
        Dataset::PageLinks,
        Dataset::GeoCoordinates,
        Dataset::CategoryLabels,
        Dataset::ArticleCategories,
        Dataset::ExternalLinks,
        Dataset::Homepages,
        Dataset::DisambiguationLinks,
        Dataset::Persondata,
        Dataset::Pnd,
        Dataset::SkosCategories,
        Dataset::Redirects,
        Dataset::PageIds,
        Dataset::LongAbstracts,
        Dataset::ShortAbstracts,
        Dataset::Revisions,
    ];

    /// Look up a dataset by its file-style name or its CamelCase alias.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let dataset = match tag {
            "labels" | "Labels" => Self::Labels,
            "wikipedia_links" | "LinksToWikipediaArticle" => Self::LinksToWikipediaArticle,
            "infobox_properties" | "InfoboxProperties" => Self::InfoboxProperties,
            "infobox_property_definitions" | "InfoboxPropertyDefinitions" => {
                Self::InfoboxPropertyDefinitions
            }
            "pagelinks" | "PageLinks" => Self::PageLinks,
            "geo_coordinates" | "GeoCoordinates" => Self::GeoCoordinates,
            "category_labels" | "CategoryLabels" => Self::CategoryLabels,
            "article_categories" | "ArticleCategories" => Self::ArticleCategories,
            "external_links" | "ExternalLinks" => Self::ExternalLinks,
            "homepages" | "Homepages" => Self::Homepages,
            "disambiguations" | "DisambiguationLinks" => Self::DisambiguationLinks,
            "persondata" | "Persondata" => Self::Persondata,
            "pnd" | "Pnd" => Self::Pnd,
            "skos_categories" | "SkosCategories" => Self::SkosCategories,
            "redirects" | "Redirects" => Self::Redirects,
            "page_ids" | "PageIds" => Self::PageIds,
            "long_abstracts" | "LongAbstracts" => Self::LongAbstracts,
            "short_abstracts" | "ShortAbstracts" => Self::ShortAbstracts,
            "revisions" | "Revisions" => Self::Revisions,
            _ => return None,
        };
        Some(dataset)
    }

    /// Canonical file-style name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Labels => "labels",
            Self::LinksToWikipediaArticle => "wikipedia_links",
            Self::InfoboxProperties => "infobox_properties",
            Self::InfoboxPropertyDefinitions => "infobox_property_definitions",
            Self::PageLinks => "pagelinks",
            Self::GeoCoordinates => "geo_coordinates",
            Self::CategoryLabels => "category_labels",
            Self::ArticleCategories => "article_categories",
            Self::ExternalLinks => "external_links",
            Self::Homepages => "homepages",
            Self::DisambiguationLinks => "disambiguations",
            Self::Persondata => "persondata",
            Self::Pnd => "pnd",
            Self::SkosCategories => "skos_categories",
            Self::Redirects => "redirects",
            Self::PageIds => "page_ids",
            Self::LongAbstracts => "long_abstracts",
            Self::ShortAbstracts => "short_abstracts",
            Self::Revisions => "revisions",
        }
    }

    /// The extractor that owns this dataset downstream.
    pub fn consumer(&self) -> &'static str {
        match self {
            Self::Labels => "org.dbpedia.extraction.mappings.LabelExtractor",
            Self::LinksToWikipediaArticle => "org.dbpedia.extraction.mappings.WikiPageExtractor",
            Self::InfoboxProperties | Self::InfoboxPropertyDefinitions => {
                "org.dbpedia.extraction.mappings.InfoboxExtractor"
            }
            Self::PageLinks => "org.dbpedia.extraction.mappings.PageLinksExtractor",
            Self::GeoCoordinates => "org.dbpedia.extraction.mappings.GeoExtractor",
            Self::CategoryLabels => "org.dbpedia.extraction.mappings.CategoryLabelExtractor",
            Self::ArticleCategories => "org.dbpedia.extraction.mappings.ArticleCategoriesExtractor",
            Self::ExternalLinks => "org.dbpedia.extraction.mappings.ExternalLinksExtractor",
            Self::Homepages => "org.dbpedia.extraction.mappings.HomepageExtractor",
            Self::DisambiguationLinks => "org.dbpedia.extraction.mappings.DisambiguationExtractor",
            Self::Persondata => "org.dbpedia.extraction.mappings.PersondataExtractor",
            Self::Pnd => "org.dbpedia.extraction.mappings.PndExtractor",
            Self::SkosCategories => "org.dbpedia.extraction.mappings.SkosCategoriesExtractor",
            Self::Redirects => "org.dbpedia.extraction.mappings.RedirectExtractor",
            Self::PageIds => "org.dbpedia.extraction.mappings.PageIdExtractor",
            Self::LongAbstracts | Self::ShortAbstracts => {
                "org.dbpedia.extraction.mappings.AbstractExtractor"
            }
            Self::Revisions => "org.dbpedia.extraction.mappings.RevisionIdExtractor",
        }
    }
}

/// Resolves dataset tags to consumer identities. Unknown tags fall back to the
/// generic mapping extractor; a miss is never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetClassifier;

impl DatasetClassifier {
    pub const DEFAULT_CONSUMER: &'static str = "org.dbpedia.extraction.mappings.MappingExtractor";

    pub fn classify(tag: &str) -> ConsumerId {
        let consumer = match Dataset::from_tag(tag) {
            Some(dataset) => dataset.consumer(),
            None => Self::DEFAULT_CONSUMER,
        };
        ConsumerId::from(consumer)
    }
}
