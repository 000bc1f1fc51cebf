//! Maps GraphQL scalar names to C# type strings, plus the naming helpers
//! used by the renderer.
//!
//! # Scalar Mapping Table
//!
//! | GraphQL scalar | C# type | Notes |
//! |----------------|---------|-------|
//! | `ID`, `Uuid` | `Guid` | |
//! | `String` | `string` | |
//! | `Boolean` | `bool` | |
//! | `Int` | `int` | |
//! | `Float` | `float` | |
//! | `Byte` | `byte` | |
//! | `Short` | `short` | |
//! | `Long` | `long` | |
//! | `Decimal` | `decimal` | |
//! | `Url` | `Uri` | |
//! | `DateTime`, `Date` | `DateTime` | |
//! | `Any` | `object` | |
//! | Anything else | unchanged | Reference to another generated declaration |

use std::collections::{BTreeMap, BTreeSet};

/// The built-in scalar table, in lookup order.
pub const DEFAULT_SCALARS: &[(&str, &str)] = &[
    ("ID", "Guid"),
    ("String", "string"),
    ("Boolean", "bool"),
    ("Int", "int"),
    ("Float", "float"),
    ("Byte", "byte"),
    ("Short", "short"),
    ("Long", "long"),
    ("Decimal", "decimal"),
    ("Url", "Uri"),
    ("DateTime", "DateTime"),
    ("Date", "DateTime"),
    ("Uuid", "Guid"),
    ("Any", "object"),
];

/// Scalar lookup table: the defaults plus any configured overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarMap {
    entries: BTreeMap<String, String>,
}

impl Default for ScalarMap {
    fn default() -> Self {
        ScalarMap {
            entries: DEFAULT_SCALARS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl ScalarMap {
    /// The default table with `overrides` applied on top. Overrides may
    /// replace a default mapping or add a new scalar.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut map = ScalarMap::default();
        for (scalar, target) in overrides {
            map.entries.insert(scalar.clone(), target.clone());
        }
        map
    }

    /// Map a leaf type name to its C# type. Unknown names are returned as-is.
    pub fn map<'a>(&'a self, scalar_name: &'a str) -> &'a str {
        self.entries
            .get(scalar_name)
            .map(String::as_str)
            .unwrap_or(scalar_name)
    }

}

/// Uppercase the first character, leaving the rest untouched.
///
/// - `"firstName"` → `"FirstName"`
/// - `"id"` → `"Id"`
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Convert a GraphQL enum value to a C# enumerant name.
///
/// - `"RED"` → `"Red"`
/// - `"DARK_RED"` → `"DarkRed"`
/// - `"inProgress"` → `"InProgress"`
/// - `"_PRIVATE"` → `"_Private"`
///
/// All-caps segments are lowercased before capitalizing; mixed-case
/// segments keep their inner casing. Leading underscores are kept, and a
/// value with nothing left to convert (`"_"`) is returned unchanged.
pub fn to_enumerant_name(value: &str) -> String {
    let body = value.trim_start_matches('_');
    let prefix = &value[..value.len() - body.len()];

    let converted: String = body
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part.chars().any(|c| c.is_lowercase()) {
                capitalize(part)
            } else {
                capitalize(&part.to_lowercase())
            }
        })
        .collect();

    if converted.is_empty() {
        return value.to_string();
    }
    format!("{prefix}{converted}")
}

/// Enumerant names for every value of one enum, in order, with no duplicates.
///
/// When two values convert to the same name (`DARK_RED` and `DarkRed`), the
/// later one keeps its raw spelling, or gets a numeric suffix if that is
/// taken too.
pub fn enumerant_names<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut used = BTreeSet::new();
    let mut names = Vec::new();

    for value in values {
        let mut name = to_enumerant_name(value);
        if used.contains(&name) {
            name = value.to_string();
        }
        let base = name.clone();
        let mut suffix = 2;
        while used.contains(&name) {
            name = format!("{base}{suffix}");
            suffix += 1;
        }
        used.insert(name.clone());
        names.push(name);
    }

    names
}

/// English plural of a type name, used for aggregator collection members.
///
/// - `"User"` → `"Users"`
/// - `"Category"` → `"Categories"`
/// - `"Address"` → `"Addresses"`
/// - `"Day"` → `"Days"`
pub fn pluralize(name: &str) -> String {
    let lower = name.to_lowercase();

    if let Some(stem) = name.strip_suffix(['y', 'Y']) {
        let before_y = stem.chars().last();
        if before_y.is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return format!("{name}es");
    }

    format!("{name}s")
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
