use std::collections::HashMap;

/// One parsed health reporter line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub attributes: HashMap<String, String>,
    /// Trimmed text after the reporter separator, echoed verbatim in detail lines.
    pub raw: String,
}

impl Entry {
    /// Lower-cased `color`, `green` when absent.
    pub fn color(&self) -> String {
        self.attributes
            .get("color")
            .map_or_else(|| "green".into(), |c| c.to_lowercase())
    }

    pub fn display_name(&self) -> &str {
        ["feature", "node_path"]
            .iter()
            .filter_map(|key| self.attributes.get(*key))
            .find(|value| !value.is_empty())
            .map_or("Component", String::as_str)
    }
}
