//! Codec for map-shaped nodes (paths, callbacks, responses) whose entries are
//! keyed by author-chosen strings rather than fixed keywords.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{Deserialize, IgnoredAny, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::extensions::{is_extension, Extensions};

/// Entries and extensions decoded from a map-shaped node.
pub(crate) type KeyedEntries<T> = (IndexMap<String, T>, Extensions);

/// Visits a map, decoding entries whose key passes `accepts` as `T`,
/// collecting `x-` keys as extensions and skipping everything else.
pub(crate) struct KeyedVisitor<T> {
    expecting: &'static str,
    accepts: fn(&str) -> bool,
    marker: PhantomData<T>,
}

impl<T> KeyedVisitor<T> {
    pub(crate) fn new(expecting: &'static str, accepts: fn(&str) -> bool) -> Self {
        Self {
            expecting,
            accepts,
            marker: PhantomData,
        }
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedVisitor<T> {
    type Value = KeyedEntries<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = IndexMap::new();
        let mut extensions = Extensions::new();
        while let Some(key) = map.next_key::<String>()? {
            if is_extension(&key) {
                let value = map.next_value::<Value>()?;
                extensions.insert_raw(key, value);
            } else if (self.accepts)(&key) {
                let value = map.next_value::<T>()?;
                entries.insert(key, value);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok((entries, extensions))
    }
}

/// Writes entries first, then extensions, as one JSON object.
pub(crate) fn serialize_keyed<'a, S, T, I>(
    serializer: S,
    entries: I,
    extensions: &Extensions,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize + 'a,
    I: IntoIterator<Item = (&'a str, &'a T)>,
{
    let mut map = serializer.serialize_map(None)?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    for (name, value) in extensions {
        map.serialize_entry(name, value)?;
    }
    map.end()
}
