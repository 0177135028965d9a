/// Macro to define one option node of the configuration schema.
///
/// A single invocation declares the node struct (every field `Option<T>`,
/// unset fields skipped in every output form), a chainable setter per
/// field, serde derives with the exact schema property names, and the
/// `OptionNode`/`ToScriptValue` impls that collect populated fields in
/// declaration order.
///
/// Each field names its schema property explicitly; names like `type` and
/// `useHTML` cannot be derived from the Rust field name. A field may
/// override its serialization directive with `as <Format>`:
///
/// ```ignore
/// options! {
///     /// Text labels for plot lines.
///     pub struct PlotLineLabel {
///         /// Horizontal alignment of the label. Default: center
///         align: HorizontalAlign => "align",
///         /// CSS styles for the text label.
///         style: String => "style" as Format::Templated("{ {} }"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! options {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $ext:literal $(as $fmt:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $ext, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$fmeta])*
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::OptionNode for $name {
            fn to_object(&self) -> $crate::ScriptObject {
                let mut object = $crate::ScriptObject::new();
                $(
                    if let Some(value) = &self.$field {
                        let format = None $(.or(Some($fmt)))?
                            .unwrap_or($crate::Format::Named);
                        object.push($crate::Entry::new(
                            $ext,
                            format,
                            $crate::ToScriptValue::to_script_value(value),
                        ));
                    }
                )*
                object
            }
        }

        impl $crate::ToScriptValue for $name {
            fn to_script_value(&self) -> $crate::ScriptValue {
                $crate::ScriptValue::Object($crate::OptionNode::to_object(self))
            }
        }

        impl From<$name> for $crate::ScriptValue {
            fn from(node: $name) -> Self {
                $crate::ToScriptValue::to_script_value(&node)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use highcharts_script::{Format, Number, OptionNode};

    options! {
        /// Inner node for the macro tests
        struct ProbeNested {
            duration: Number => "duration",
            easing: String => "easing",
        }
    }

    options! {
        /// Node exercising every macro feature
        struct Probe {
            enabled: bool => "enabled",
            line_width: Number => "lineWidth",
            label: String => "label",
            style: String => "style" as Format::Templated("{ {} }"),
            nested: ProbeNested => "nested",
            inlined: ProbeNested => "inlined" as Format::BareUnbraced,
        }
    }

    #[test]
    fn test_unset_node_renders_empty_braces() {
        assert_eq!(Probe::new().to_object().to_script_text(), "{ }");
    }

    #[test]
    fn test_fields_render_in_declaration_order() {
        // Setter call order must not matter
        let probe = Probe::new().line_width(0).enabled(true);
        assert_eq!(
            probe.to_object().to_script_text(),
            "{ enabled: true, lineWidth: 0 }"
        );
    }

    #[test]
    fn test_unset_fields_leave_no_trace() {
        let probe = Probe::new().label("x");
        assert_eq!(probe.to_object().to_script_text(), "{ label: 'x' }");
    }

    #[test]
    fn test_template_directive() {
        let probe = Probe::new().style("color: 'red'");
        assert_eq!(
            probe.to_object().to_script_text(),
            "{ style: { color: 'red' } }"
        );
    }

    #[test]
    fn test_nested_node_recurses() {
        let probe = Probe::new().nested(ProbeNested::new().duration(400));
        assert_eq!(
            probe.to_object().to_script_text(),
            "{ nested: { duration: 400 } }"
        );
    }

    #[test]
    fn test_bare_unbraced_field_splices() {
        let probe = Probe::new()
            .enabled(false)
            .inlined(ProbeNested::new().duration(250).easing("linear"));
        assert_eq!(
            probe.to_object().to_script_text(),
            "{ enabled: false, duration: 250, easing: 'linear' }"
        );
    }

    #[test]
    fn test_serde_uses_schema_names_and_skips_unset() {
        let probe = Probe::new().enabled(true).line_width(2);
        assert_eq!(
            serde_json::to_string(&probe).unwrap(),
            r#"{"enabled":true,"lineWidth":2}"#
        );
    }

    #[test]
    fn test_serde_ignores_unknown_keys() {
        let probe: Probe =
            serde_json::from_str(r#"{"enabled":true,"somethingElse":1}"#).unwrap();
        assert_eq!(probe.enabled, Some(true));
        assert_eq!(probe.line_width, None);
    }
}
