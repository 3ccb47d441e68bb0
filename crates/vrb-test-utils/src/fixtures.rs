//! Sample archive references and package descriptors.
//!
//! The values mirror the shapes found in a real visual runtime `package.json`:
//! a dated JET archive, a `...-webdriver-<version>` archive and a telemetry
//! archive whose version is the name of its folder.

use serde_json::{Value, json};

pub const PACKAGE_VERSION: &str = "2.3.0";
pub const RELEASE_SPRINT: &str = "25.07";

pub const ORACLEJET: &str = "@oracle/oraclejet";
pub const ORACLEJET_REFERENCE: &str =
    "https://artifacts.example.com/jet/v14.1.0-2024-03-15_10-30-00.tgz";
pub const ORACLEJET_LABEL: &str = "v14.1.0";
pub const ORACLEJET_REVISION: &str = "2024-03-15_10-30-00";

pub const OJ_DYNAMIC: &str = "@oracle/oj-dynamic-webdriver";
pub const OJ_DYNAMIC_REFERENCE: &str = "file:vendor/oj-dynamic-webdriver-14.1.2.tgz";
pub const OJ_DYNAMIC_VERSION: &str = "14.1.2";

pub const TELEMETRY: &str = "telemetry-webdriver";
pub const TELEMETRY_REFERENCE: &str = "file:vendor/24.10.1/telemetry-webdriver.tgz";
pub const TELEMETRY_VERSION: &str = "24.10.1";

pub const WORKBOX: &str = "workbox-build";
pub const WORKBOX_VERSION: &str = "7.1.0";

/// A complete package descriptor covering every built-in component.
pub fn package_json() -> Value {
    package_json_with_version(PACKAGE_VERSION)
}

/// [`package_json`] with a different `version` field.
pub fn package_json_with_version(version: &str) -> Value {
    json!({
        "name": "visual-runtime",
        "version": version,
        "release": RELEASE_SPRINT,
        "dependencies": {
            ORACLEJET: ORACLEJET_REFERENCE,
        },
        "devDependencies": {
            OJ_DYNAMIC: OJ_DYNAMIC_REFERENCE,
            TELEMETRY: TELEMETRY_REFERENCE,
            WORKBOX: WORKBOX_VERSION,
        }
    })
}

/// [`package_json`] without the given `devDependencies` entry.
pub fn package_json_without_dev(name: &str) -> Value {
    let mut package = package_json();
    if let Some(dev) = package["devDependencies"].as_object_mut() {
        dev.remove(name);
    }
    package
}
