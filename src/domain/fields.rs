use std::collections::HashMap;

use serde_json::Value;

/// Name-to-value projection of a record's exported fields. Built fresh on
/// every extraction call; keys are the external field names.
pub type ExportedMap = HashMap<String, Value>;

/// Whether a field is part of the exported projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    Exported,
    Internal,
}

/// One entry in a record's field table: external name, exposure marker and
/// an accessor reading the current value.
pub struct FieldSpec<T> {
    pub name: &'static str,
    pub exposure: Exposure,
    pub read: fn(&T) -> Value,
}

/// A record with a statically declared field table. Names must be unique
/// within one table.
pub trait Inspect: Sized + 'static {
    const FIELDS: &'static [FieldSpec<Self>];
}

/// Projects the exported fields of `record` into a fresh map.
///
/// Internal entries are skipped; a table without exported entries yields an
/// empty map. Values are read verbatim at call time.
pub fn exported_map<T: Inspect>(record: &T) -> ExportedMap {
    T::FIELDS
        .iter()
        .filter(|field| field.exposure == Exposure::Exported)
        .map(|field| (field.name.to_string(), (field.read)(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Sample {
        visible: i64,
        hidden: String,
    }

    impl Inspect for Sample {
        const FIELDS: &'static [FieldSpec<Self>] = &[
            FieldSpec {
                name: "Visible",
                exposure: Exposure::Exported,
                read: |s| json!(s.visible),
            },
            FieldSpec {
                name: "Hidden",
                exposure: Exposure::Internal,
                read: |s| json!(s.hidden),
            },
        ];
    }

    struct Opaque;

    impl Inspect for Opaque {
        const FIELDS: &'static [FieldSpec<Self>] = &[];
    }

    #[test]
    fn keeps_only_exported_fields() {
        let sample = Sample {
            visible: 7,
            hidden: "secret".to_string(),
        };

        let map = exported_map(&sample);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Visible"), Some(&json!(7)));
        assert!(!map.contains_key("Hidden"));
    }

    #[test]
    fn empty_field_table_yields_empty_map() {
        assert!(exported_map(&Opaque).is_empty());
    }

    #[test]
    fn values_are_read_at_extraction_time() {
        let mut sample = Sample {
            visible: 1,
            hidden: String::new(),
        };

        let before = exported_map(&sample);
        sample.visible = 2;
        let after = exported_map(&sample);

        assert_eq!(before.get("Visible"), Some(&json!(1)));
        assert_eq!(after.get("Visible"), Some(&json!(2)));
    }
}
