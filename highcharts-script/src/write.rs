//! Object-literal writer.
//!
//! Turns [`ScriptValue`](crate::value::ScriptValue) trees into the
//! JavaScript configuration text Highcharts consumes. Output is plain
//! object-literal syntax, single-quoted strings, `Date.UTC(...)` for
//! dates, and is fully determined by the input tree.

use chrono::{Datelike, Timelike};
use itertools::Itertools;

use crate::object::{Entry, Format, ScriptObject};
use crate::value::ScriptValue;

impl ScriptValue {
    /// Render this value as configuration script text.
    pub fn to_script_text(&self) -> String {
        let mut out = String::new();
        write_value(&mut out, self);
        out
    }
}

impl ScriptObject {
    /// Render as a brace-wrapped object literal.
    ///
    /// An empty node still renders `{ }`: a node that was set is a value,
    /// even when none of its own options are.
    pub fn to_script_text(&self) -> String {
        let mut out = String::new();
        write_object(&mut out, self);
        out
    }

    /// Render the entries alone, without the surrounding braces.
    ///
    /// This is the form the `NamedUnbraced` and `BareUnbraced` directives
    /// splice into their parent.
    pub fn to_bare_entries(&self) -> String {
        self.entries()
            .iter()
            .map(render_entry)
            .filter(|rendered| !rendered.is_empty())
            .join(", ")
    }
}

fn write_value(out: &mut String, value: &ScriptValue) {
    match value {
        ScriptValue::Null => out.push_str("null"),
        ScriptValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        ScriptValue::Number(number) => out.push_str(&number.to_string()),
        ScriptValue::Str(text) => {
            out.push('\'');
            out.push_str(&escape_single_quoted(text));
            out.push('\'');
        }
        ScriptValue::Date(datetime) => write_date(out, datetime),
        ScriptValue::Raw(text) => out.push_str(text),
        ScriptValue::Array(items) => {
            out.push('[');
            out.push_str(&items.iter().map(ScriptValue::to_script_text).join(", "));
            out.push(']');
        }
        ScriptValue::Object(object) => write_object(out, object),
    }
}

fn write_object(out: &mut String, object: &ScriptObject) {
    let entries = object.to_bare_entries();
    if entries.is_empty() {
        out.push_str("{ }");
    } else {
        out.push_str("{ ");
        out.push_str(&entries);
        out.push_str(" }");
    }
}

fn render_entry(entry: &Entry) -> String {
    match entry.format {
        Format::Named => format!("{}: {}", render_name(&entry.name), entry.value.to_script_text()),
        Format::Bare => entry.value.to_script_text(),
        Format::NamedUnbraced => {
            let rendered = match &entry.value {
                ScriptValue::Object(object) => object.to_bare_entries(),
                value => value.to_script_text(),
            };
            format!("{}: {}", render_name(&entry.name), rendered)
        }
        Format::BareUnbraced => match &entry.value {
            ScriptValue::Object(object) => object.to_bare_entries(),
            value => value.to_script_text(),
        },
        Format::Templated(template) => {
            format!(
                "{}: {}",
                render_name(&entry.name),
                apply_template(template, &entry.value)
            )
        }
    }
}

/// Keys bridged from JSON may not be identifier-safe; quote those
fn render_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", escape_single_quoted(name))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// The `{}` slot takes the raw form of the value: strings go in verbatim
/// and unquoted so templates can wrap them in their own syntax.
fn apply_template(template: &'static str, value: &ScriptValue) -> String {
    debug_assert!(
        template.contains("{}"),
        "template {template:?} has no {{}} slot for the value"
    );
    let raw = match value {
        ScriptValue::Str(text) => text.clone(),
        value => value.to_script_text(),
    };
    template.replacen("{}", &raw, 1)
}

fn escape_single_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `Date.UTC(year, month, day[, hours, minutes, seconds[, millis]])`,
/// month zero-based as JavaScript counts it. Midnight keeps the short
/// three-argument form.
fn write_date(out: &mut String, datetime: &chrono::NaiveDateTime) {
    let date = datetime.date();
    let time = datetime.time();
    let millis = time.nanosecond() / 1_000_000;
    out.push_str(&format!(
        "Date.UTC({}, {}, {}",
        date.year(),
        date.month0(),
        date.day()
    ));
    if time.num_seconds_from_midnight() != 0 || millis != 0 {
        out.push_str(&format!(
            ", {}, {}, {}",
            time.hour(),
            time.minute(),
            time.second()
        ));
        if millis != 0 {
            out.push_str(&format!(", {millis}"));
        }
    }
    out.push(')');
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use crate::object::{Entry, Format, ScriptObject};
    use crate::value::ScriptValue;

    fn object(entries: Vec<Entry>) -> ScriptObject {
        entries.into_iter().collect()
    }

    #[rstest]
    #[case(ScriptValue::Null, "null")]
    #[case(ScriptValue::from(true), "true")]
    #[case(ScriptValue::from(false), "false")]
    #[case(ScriptValue::from(12), "12")]
    #[case(ScriptValue::from(0.75), "0.75")]
    #[case(ScriptValue::from("Tokyo"), "'Tokyo'")]
    fn test_scalars(#[case] value: ScriptValue, #[case] expected: &str) {
        assert_eq!(value.to_script_text(), expected);
    }

    #[rstest]
    #[case("it's a 'test'", r"'it\'s a \'test\''")]
    #[case("a\\b\nc\td", r"'a\\b\nc\td'")]
    #[case("line\rbreak", r"'line\rbreak'")]
    fn test_string_escaping(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(ScriptValue::from(input).to_script_text(), expected);
    }

    #[test]
    fn test_raw_text_is_untouched() {
        assert_eq!(
            ScriptValue::raw("function() { return this.y; }").to_script_text(),
            "function() { return this.y; }"
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(ScriptValue::Array(vec![]).to_script_text(), "[]");
        assert_eq!(
            ScriptValue::from(vec![1, 2, 3]).to_script_text(),
            "[1, 2, 3]"
        );
        assert_eq!(
            ScriptValue::from(vec!["a", "b"]).to_script_text(),
            "['a', 'b']"
        );
    }

    #[test]
    fn test_empty_object_renders_braces() {
        assert_eq!(ScriptObject::new().to_script_text(), "{ }");
    }

    #[test]
    fn test_object_entries_in_order() {
        let mut obj = ScriptObject::new();
        obj.push_value("enabled", true);
        obj.push_value("lineWidth", 0);
        assert_eq!(obj.to_script_text(), "{ enabled: true, lineWidth: 0 }");
    }

    #[test]
    fn test_nested_objects_recurse() {
        let mut inner = ScriptObject::new();
        inner.push_value("text", "Snow depth");
        let mut outer = ScriptObject::new();
        outer.push_value("title", inner);
        outer.push_value("min", 0);
        assert_eq!(
            outer.to_script_text(),
            "{ title: { text: 'Snow depth' }, min: 0 }"
        );
    }

    #[test]
    fn test_bare_suppresses_name() {
        let obj = object(vec![Entry::new("value", Format::Bare, ScriptValue::from(7))]);
        assert_eq!(obj.to_script_text(), "{ 7 }");
    }

    #[test]
    fn test_named_unbraced_drops_value_braces() {
        let mut inner = ScriptObject::new();
        inner.push_value("duration", 400);
        let obj = object(vec![Entry::new(
            "animation",
            Format::NamedUnbraced,
            inner.into(),
        )]);
        assert_eq!(obj.to_script_text(), "{ animation: duration: 400 }");
    }

    #[test]
    fn test_bare_unbraced_splices_into_parent() {
        let mut spliced = ScriptObject::new();
        spliced.push_value("pointStart", 1);
        spliced.push_value("pointInterval", 2);
        let obj = object(vec![
            Entry::new("name", Format::Named, ScriptValue::from("Rain")),
            Entry::new("options", Format::BareUnbraced, spliced.into()),
            Entry::new("visible", Format::Named, ScriptValue::from(true)),
        ]);
        assert_eq!(
            obj.to_script_text(),
            "{ name: 'Rain', pointStart: 1, pointInterval: 2, visible: true }"
        );
    }

    #[test]
    fn test_bare_unbraced_empty_object_leaves_no_separator() {
        let obj = object(vec![
            Entry::new("a", Format::Named, ScriptValue::from(1)),
            Entry::new("options", Format::BareUnbraced, ScriptObject::new().into()),
            Entry::new("b", Format::Named, ScriptValue::from(2)),
        ]);
        assert_eq!(obj.to_script_text(), "{ a: 1, b: 2 }");
    }

    #[test]
    fn test_template_takes_string_verbatim() {
        let obj = object(vec![Entry::new(
            "style",
            Format::Templated("{ {} }"),
            ScriptValue::from("color: 'red', fontWeight: 'bold'"),
        )]);
        assert_eq!(
            obj.to_script_text(),
            "{ style: { color: 'red', fontWeight: 'bold' } }"
        );
    }

    #[test]
    fn test_template_takes_literal_of_non_string() {
        let obj = object(vec![Entry::new(
            "width",
            Format::Templated("Math.min({}, 400)"),
            ScriptValue::from(250),
        )]);
        assert_eq!(obj.to_script_text(), "{ width: Math.min(250, 400) }");
    }

    #[test]
    #[should_panic(expected = "no {} slot")]
    fn test_template_without_slot_is_rejected() {
        let obj = object(vec![Entry::new(
            "style",
            Format::Templated("{ }"),
            ScriptValue::from("color: 'red'"),
        )]);
        obj.to_script_text();
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let obj = object(vec![
            Entry::dynamic("line-width", ScriptValue::from(2)),
            Entry::dynamic("plain", ScriptValue::from(1)),
        ]);
        assert_eq!(obj.to_script_text(), "{ 'line-width': 2, plain: 1 }");
    }

    #[test]
    fn test_date_midnight_short_form() {
        let date = NaiveDate::from_ymd_opt(2012, 4, 28).unwrap();
        assert_eq!(
            ScriptValue::from(date).to_script_text(),
            "Date.UTC(2012, 3, 28)"
        );
    }

    #[test]
    fn test_date_with_time_of_day() {
        let datetime = NaiveDate::from_ymd_opt(2012, 4, 28)
            .unwrap()
            .and_hms_opt(13, 30, 5)
            .unwrap();
        assert_eq!(
            ScriptValue::from(datetime).to_script_text(),
            "Date.UTC(2012, 3, 28, 13, 30, 5)"
        );
    }

    #[test]
    fn test_date_with_milliseconds() {
        let datetime = NaiveDate::from_ymd_opt(2012, 4, 28)
            .unwrap()
            .and_hms_milli_opt(13, 30, 5, 250)
            .unwrap();
        assert_eq!(
            ScriptValue::from(datetime).to_script_text(),
            "Date.UTC(2012, 3, 28, 13, 30, 5, 250)"
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut obj = ScriptObject::new();
        obj.push_value("a", vec![1, 2]);
        obj.push_value("b", "x");
        let first = obj.to_script_text();
        assert_eq!(obj.to_script_text(), first);
    }
}
