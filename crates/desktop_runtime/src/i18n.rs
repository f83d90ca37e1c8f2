//! Translation catalog compiled in from `messages/*.toml`.

use std::{collections::HashMap, sync::OnceLock};

use serde::Deserialize;
use serde_json::Value;

use crate::model::Locale;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/message_catalog_generated.rs"));
}

#[derive(Debug, Deserialize)]
struct LocaleCatalog {
    locale: String,
    messages: Value,
}

fn catalogs() -> &'static HashMap<String, Value> {
    static CATALOGS: OnceLock<HashMap<String, Value>> = OnceLock::new();
    CATALOGS.get_or_init(|| {
        match serde_json::from_str::<Vec<LocaleCatalog>>(generated::MESSAGE_CATALOG_JSON) {
            Ok(entries) => entries
                .into_iter()
                .map(|entry| (entry.locale, entry.messages))
                .collect(),
            Err(err) => {
                leptos::logging::warn!("message catalog parse failed: {err}");
                HashMap::new()
            }
        }
    })
}

/// Resolves a dotted `key` (for example `trash.restoreAll`) for `locale`.
///
/// Falls back to the raw key when any segment is missing or the value is not a string.
pub fn translate(locale: Locale, key: &str) -> String {
    let Some(mut node) = catalogs().get(locale.code()) else {
        return key.to_string();
    };
    for segment in key.split('.') {
        match node.get(segment) {
            Some(next) => node = next,
            None => return key.to_string(),
        }
    }
    node.as_str()
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_nested_keys_per_locale() {
        assert_eq!(translate(Locale::En, "trash.restoreAll"), "Restore all");
        assert_eq!(translate(Locale::Pt, "trash.restoreAll"), "Restaurar todos");
    }

    #[test]
    fn missing_or_non_leaf_keys_fall_back_to_raw_key() {
        assert_eq!(translate(Locale::En, "trash.nope"), "trash.nope");
        assert_eq!(translate(Locale::Pt, "nothing.here.at.all"), "nothing.here.at.all");
        assert_eq!(translate(Locale::En, "appearance"), "appearance");
    }

    #[test]
    fn both_catalogs_define_the_same_keys() {
        fn leaf_keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
            match value {
                Value::Object(map) => {
                    for (k, v) in map {
                        let next = if prefix.is_empty() {
                            k.clone()
                        } else {
                            format!("{prefix}.{k}")
                        };
                        leaf_keys(&next, v, out);
                    }
                }
                _ => out.push(prefix.to_string()),
            }
        }

        let mut en = Vec::new();
        let mut pt = Vec::new();
        leaf_keys("", &catalogs()["en"], &mut en);
        leaf_keys("", &catalogs()["pt"], &mut pt);
        en.sort();
        pt.sort();
        assert_eq!(en, pt);
    }
}
