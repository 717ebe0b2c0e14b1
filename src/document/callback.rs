//! Out-of-band callbacks.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::keyed::{serialize_keyed, KeyedVisitor};
use super::PathItem;
use crate::extensions::{impl_extensible, Extensions};
use crate::reference::REF_KEYWORD;

/// Runtime expressions (e.g. `{$request.body#/callbackUrl}`) mapped to the
/// path item the API provider will call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callback {
    pub expressions: IndexMap<String, PathItem>,
    pub extensions: Extensions,
}

impl Callback {
    pub fn get(&self, expression: &str) -> Option<&PathItem> {
        self.expressions.get(expression)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PathItem)> {
        self.expressions.iter()
    }
}

impl Serialize for Callback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_keyed(
            serializer,
            self.expressions.iter().map(|(k, v)| (k.as_str(), v)),
            &self.extensions,
        )
    }
}

impl<'de> Deserialize<'de> for Callback {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // An empty `$ref` leaves the node inline; the key is never an expression.
        let visitor = KeyedVisitor::new("a map of callback expressions", |key| key != REF_KEYWORD);
        let (expressions, extensions) = deserializer.deserialize_map(visitor)?;
        Ok(Self {
            expressions,
            extensions,
        })
    }
}

impl_extensible!(Callback);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_value, to_value};
    use crate::reference::RefOr;
    use serde_json::json;

    #[test]
    fn test_callback_inline_and_reference() {
        let input = json!({
            "{$request.body#/url}": {"post": {"responses": {"200": {"description": "ok"}}}},
            "x-hook": true
        });
        let callback: RefOr<Callback> = from_value(input.clone()).unwrap();
        let inline = callback.as_item().unwrap();
        assert!(inline.get("{$request.body#/url}").is_some());
        assert_eq!(to_value(&callback).unwrap(), input);

        let callback: RefOr<Callback> =
            from_value(json!({"$ref": "#/components/callbacks/hook"})).unwrap();
        assert!(callback.is_reference());
    }

    #[test]
    fn test_empty_pointer_is_not_an_expression() {
        let callback: RefOr<Callback> = from_value(json!({
            "$ref": "",
            "{$request.body#/url}": {"post": {"responses": {"200": {"description": "ok"}}}}
        }))
        .unwrap();

        let inline = callback.as_item().unwrap();
        assert_eq!(inline.expressions.len(), 1);
        assert!(inline.get("$ref").is_none());
        assert_eq!(
            to_value(&callback).unwrap(),
            json!({"{$request.body#/url}": {"post": {"responses": {"200": {"description": "ok"}}}}})
        );
    }
}
