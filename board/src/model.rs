//! Catalog wire model.
//!
//! DESIGN
//! ======
//! The list endpoint returns a JSON object keyed by activity name. Display
//! order is the server's key order, so the catalog is deserialized through a
//! map visitor into an ordered `Vec` rather than a hash map.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server has over-allocated.
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// An activity paired with its unique name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub activity: Activity,
}

/// All activities from the last successful fetch, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Insert or replace an activity. A replaced activity keeps its position.
    pub fn insert(&mut self, name: String, activity: Activity) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            existing.activity = activity;
        } else {
            self.entries.push(CatalogEntry { name, activity });
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.activity)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Activity names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a list-endpoint body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not a mapping of
    /// activity records.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = Self::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Catalog, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut catalog = Catalog::default();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
