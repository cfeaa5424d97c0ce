use crate::filters::{ApiFilterGroup, ApiListJoiner, FilterConfig};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Private,
    Public,
    Shared,
}

/// How matching items are grouped when the list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grouping {
    #[default]
    ByBooks,
    BySeries,
    ByLibrary,
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grouping::ByBooks => "BY_BOOKS",
            Grouping::BySeries => "BY_SERIES",
            Grouping::ByLibrary => "BY_LIBRARY",
        };
        f.write_str(label)
    }
}

/// A smart list as the editing surface holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartListForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Grouping>,
    pub filters: FilterConfig,
}

impl SmartListForm {
    pub fn new(name: impl Into<String>, filters: FilterConfig) -> Self {
        Self {
            name: name.into(),
            description: None,
            visibility: Visibility::default(),
            grouping: None,
            filters,
        }
    }
}

/// A smart list as the server accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSmartListInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub visibility: Visibility,
    #[serde(default, alias = "default_grouping")]
    pub default_grouping: Grouping,
    pub joiner: ApiListJoiner,
    /// Always written as a list. A lone `{ joiner, groups }` object is read
    /// as a list holding that one group.
    #[serde(deserialize_with = "one_or_many_groups")]
    pub filters: Vec<ApiFilterGroup>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupList {
    Many(Vec<ApiFilterGroup>),
    One(ApiFilterGroup),
}

fn one_or_many_groups<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<ApiFilterGroup>, D::Error> {
    Ok(match GroupList::deserialize(deserializer)? {
        GroupList::Many(groups) => groups,
        GroupList::One(group) => vec![group],
    })
}
