use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::field_ref::FieldRef;

pub const TAGS_FIELD: &str = "tags";

/// Named field access the filter needs from a record.
pub trait FieldAccessor {
    /// String value at `field`. Missing and non-string values are `None`.
    fn get(&self, field: &FieldRef) -> Option<&str>;
    fn set_str(&mut self, field: &FieldRef, value: &str);
    fn set_bool(&mut self, field: &FieldRef, value: bool);
    /// Appends `tag` unless the record already carries it.
    fn add_tag(&mut self, tag: &str);
}

/// A record backed by a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(Map<String, Value>);

impl Event {
    pub fn new() -> Self {
        Event(Map::new())
    }

    pub fn get_value(&self, field: &FieldRef) -> Option<&Value> {
        let (first, rest) = field.segments().split_first()?;
        rest.iter()
            .try_fold(self.0.get(first)?, |value, segment| value.as_object()?.get(segment))
    }

    /// Intermediate values that are not objects are replaced by objects.
    pub fn set_value(&mut self, field: &FieldRef, value: Value) {
        let Some((last, parents)) = field.segments().split_last() else {
            return;
        };
        let mut map = &mut self.0;
        for segment in parents {
            let slot = map
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            match slot.as_object_mut() {
                Some(inner) => map = inner,
                None => return,
            }
        }
        map.insert(last.clone(), value);
    }

    pub fn tags(&self) -> Vec<&str> {
        match self.0.get(TAGS_FIELD) {
            Some(Value::Array(tags)) => tags.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(tag)) => vec![tag.as_str()],
            _ => vec![],
        }
    }
}

impl FieldAccessor for Event {
    fn get(&self, field: &FieldRef) -> Option<&str> {
        self.get_value(field)?.as_str()
    }

    fn set_str(&mut self, field: &FieldRef, value: &str) {
        self.set_value(field, Value::String(value.to_owned()));
    }

    fn set_bool(&mut self, field: &FieldRef, value: bool) {
        self.set_value(field, Value::Bool(value));
    }

    fn add_tag(&mut self, tag: &str) {
        let slot = self
            .0
            .entry(TAGS_FIELD)
            .or_insert_with(|| Value::Array(vec![]));
        if !slot.is_array() {
            // A lone string tag becomes the first element of the list
            let existing = match slot.take() {
                Value::String(lone) => vec![Value::String(lone)],
                _ => vec![],
            };
            *slot = Value::Array(existing);
        }
        let Some(tags) = slot.as_array_mut() else {
            return;
        };
        if !tags.iter().any(|t| t.as_str() == Some(tag)) {
            tags.push(Value::String(tag.to_owned()));
        }
    }
}
