//! Core types for rdotswift.
//! Loaders decode into these; the generator reads them.

use std::{
    fmt::{Display, Formatter},
    fs::File,
    io::Read,
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::Error, traits::Parser};

/// Entries of one category, keyed by resource name.
///
/// Insertion order is preserved and decides the order of the generated
/// declarations.
pub type CategoryMap = Map<String, Value>;

/// The six kinds of resources a tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Array,
    Bool,
    Color,
    Dimen,
    Integer,
    String,
}

impl Category {
    /// Every category, in the order blocks are emitted.
    pub const ALL: [Category; 6] = [
        Category::Array,
        Category::Bool,
        Category::Color,
        Category::Dimen,
        Category::Integer,
        Category::String,
    ];

    /// Canonical lowercase name, also used as the nested Swift type name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Array => "array",
            Category::Bool => "bool",
            Category::Color => "color",
            Category::Dimen => "dimen",
            Category::Integer => "integer",
            Category::String => "string",
        }
    }

    /// Looks up a category by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == name)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the canonical names, case-insensitively.
///
/// # Example
/// ```rust
/// use rdotswift::Category;
/// use std::str::FromStr;
/// assert_eq!(Category::from_str("Color").unwrap(), Category::Color);
/// assert!(Category::from_str("plurals").is_err());
/// ```
impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Category::from_name(&s).ok_or(Error::UnknownCategory(s))
    }
}

/// A complete resource tree: one [`CategoryMap`] per [`Category`].
///
/// Deserializes from an object keyed by category name. Names must match
/// exactly: `STRING` is not `string`. Missing or `null` categories are empty
/// and unknown top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ResourceTree {
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub array: CategoryMap,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub bool: CategoryMap,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub color: CategoryMap,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub dimen: CategoryMap,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub integer: CategoryMap,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub string: CategoryMap,
}

impl ResourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category: Category) -> &CategoryMap {
        match category {
            Category::Array => &self.array,
            Category::Bool => &self.bool,
            Category::Color => &self.color,
            Category::Dimen => &self.dimen,
            Category::Integer => &self.integer,
            Category::String => &self.string,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut CategoryMap {
        match category {
            Category::Array => &mut self.array,
            Category::Bool => &mut self.bool,
            Category::Color => &mut self.color,
            Category::Dimen => &mut self.dimen,
            Category::Integer => &mut self.integer,
            Category::String => &mut self.string,
        }
    }

    /// Inserts an entry, returning the value it replaced.
    pub fn insert(
        &mut self,
        category: Category,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.category_mut(category).insert(key.into(), value.into())
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        Category::ALL
            .iter()
            .map(|category| self.category(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merges `other` into this tree.
    ///
    /// New keys are appended in `other`'s order; a key that already exists
    /// keeps its position and takes the value from `other`.
    pub fn merge(&mut self, mut other: ResourceTree) {
        for category in Category::ALL {
            let incoming = std::mem::take(other.category_mut(category));
            let target = self.category_mut(category);
            for (key, value) in incoming {
                target.insert(key, value);
            }
        }
    }
}

impl TryFrom<Value> for ResourceTree {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(root) = value else {
            return Err(Error::InvalidResource(
                "resource tree must be an object keyed by category".to_string(),
            ));
        };

        let mut tree = ResourceTree::new();
        for (name, entries) in root {
            // Only the six known categories contribute to the output.
            let Some(category) = Category::from_name(&name) else {
                continue;
            };
            match entries {
                Value::Object(map) => *tree.category_mut(category) = map,
                Value::Null => {}
                other => {
                    return Err(Error::InvalidResource(format!(
                        "`{}` must be an object, found {}",
                        category,
                        json_kind(&other)
                    )));
                }
            }
        }
        Ok(tree)
    }
}

impl Parser for ResourceTree {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let value: Value = serde_json::from_reader(reader)?;
        ResourceTree::try_from(value)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Parse)
    }

    /// Override default file reading to accept UTF-16 dumps with a BOM.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        <Self as Parser>::from_str(&decoded)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
