use crate::engine::predicate::StructuredQuery;
use serde::Serialize;

///
/// SearchRequest
///
/// Composite request document: the predicate tree plus the options block
/// that tells the engine which document paths to extract.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SearchRequest {
    pub search: Search,
}

///
/// Search
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Search {
    pub query: StructuredQuery,
    pub options: SearchOptions,
}

///
/// SearchOptions
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SearchOptions {
    #[serde(rename = "extract-document-data")]
    pub extract_document_data: ExtractDocumentData,
}

///
/// ExtractDocumentData
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ExtractDocumentData {
    pub selected: ExtractSelection,

    #[serde(rename = "extract-path")]
    pub extract_path: Vec<String>,
}

///
/// ExtractSelection
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum ExtractSelection {
    #[default]
    #[serde(rename = "include-with-ancestors")]
    IncludeWithAncestors,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: StructuredQuery, extract_path: Vec<String>) -> Self {
        Self {
            search: Search {
                query,
                options: SearchOptions {
                    extract_document_data: ExtractDocumentData {
                        selected: ExtractSelection::default(),
                        extract_path,
                    },
                },
            },
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
