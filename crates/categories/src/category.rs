use serde::Deserialize;

use stockroom_core::{CategoryId, Entity};

/// Stored product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub(crate) id: CategoryId,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) version: u64,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Entity for Category {
    type Id = CategoryId;
    type Draft = CategoryDraft;

    const RESOURCE: &'static str = "category";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            version: 0,
        }
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}

/// Validated, not-yet-stored category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
}

/// Caller-supplied fields for create and update.
///
/// Fields are optional so a missing name is reported as a validation failure
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
