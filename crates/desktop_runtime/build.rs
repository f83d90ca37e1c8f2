use std::fs;
use std::path::PathBuf;

use serde::Serialize;

const LOCALES: [&str; 2] = ["en", "pt"];

#[derive(Debug, Serialize)]
struct LocaleCatalog {
    locale: String,
    messages: serde_json::Value,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut catalogs = Vec::<LocaleCatalog>::new();

    for locale in LOCALES {
        let path = crate_root.join("messages").join(format!("{locale}.toml"));
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let table: toml::Table = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        let messages = serde_json::to_value(&table)
            .unwrap_or_else(|err| panic!("failed to convert {}: {err}", path.display()));
        if !messages.is_object() {
            panic!("catalog {} must be a table", path.display());
        }
        catalogs.push(LocaleCatalog {
            locale: locale.to_string(),
            messages,
        });
    }

    let json = serde_json::to_string_pretty(&catalogs).expect("serialize message catalogs");
    let generated = format!(
        "/// Build-time generated translation catalog JSON.\n\
pub const MESSAGE_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("message_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
