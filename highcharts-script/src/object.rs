use std::borrow::Cow;

use crate::value::ScriptValue;

/// Per-property serialization directive.
///
/// Most options render as `name: value`; a handful of spots in the
/// Highcharts syntax need the name or the braces of a nested object
/// suppressed, or a literal template around the value. The directive is
/// attached per entry and consumed uniformly by the writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// `name: value`, with the default syntax for the value's shape
    #[default]
    Named,
    /// The rendered value alone, name suppressed
    Bare,
    /// Named, but an object value renders its entries without the
    /// surrounding braces. Only useful where the value renders a single
    /// complete expression.
    NamedUnbraced,
    /// Object values splice their entries straight into the parent, no
    /// name and no braces. Used where a group of options must appear as
    /// part of the enclosing object, e.g. per-series plot options written
    /// inline in a series entry.
    BareUnbraced,
    /// `name: template`, with the single `{}` slot replaced by the raw
    /// form of the value (strings verbatim and unquoted, other values by
    /// their literal). Used for CSS style strings.
    Templated(&'static str),
}

/// One populated property: output name, directive, value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: Cow<'static, str>,
    pub format: Format,
    pub value: ScriptValue,
}

impl Entry {
    pub fn new(name: &'static str, format: Format, value: ScriptValue) -> Self {
        Entry {
            name: Cow::Borrowed(name),
            format,
            value,
        }
    }

    /// Entry with a runtime name, e.g. a key bridged from a JSON object
    pub fn dynamic(name: impl Into<String>, value: ScriptValue) -> Self {
        Entry {
            name: Cow::Owned(name.into()),
            format: Format::Named,
            value,
        }
    }
}

/// An ordered collection of populated properties, one nesting level of
/// the configuration.
///
/// Entries keep their insertion order, which for macro-generated nodes is
/// the field declaration order. The writer never sorts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptObject {
    entries: Vec<Entry>,
}

impl ScriptObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Append a `Named` entry
    pub fn push_value(&mut self, name: &'static str, value: impl Into<ScriptValue>) {
        self.entries.push(Entry::new(name, Format::Named, value.into()));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl From<ScriptObject> for ScriptValue {
    fn from(object: ScriptObject) -> Self {
        ScriptValue::Object(object)
    }
}

impl FromIterator<Entry> for ScriptObject {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        ScriptObject {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A typed container mirroring one nesting level of the Highcharts
/// configuration schema.
///
/// Unset fields are skipped entirely; the populated ones are collected in
/// declaration order with their per-field directives attached.
pub trait OptionNode {
    fn to_object(&self) -> ScriptObject;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut object = ScriptObject::new();
        object.push_value("b", 2);
        object.push_value("a", 1);
        object.push_value("c", 3);
        let names: Vec<&str> = object.entries().iter().map(|e| e.name.as_ref()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_default_format_is_named() {
        assert_eq!(Format::default(), Format::Named);
    }
}
