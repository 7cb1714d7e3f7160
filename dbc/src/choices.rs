//! The `VAL_` enumeration table attached to a signal: raw integer -> label,
//! insertion order preserved (spec §3: "Choice keys are unique per signal").

/// An ordered raw-value -> label mapping. Backed by a `Vec` rather than a
/// hash map: tables are tiny (a handful of entries) and round-trip emission
/// must reproduce the declaration order exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choices(Vec<(i64, String)>);

impl Choices {
    pub fn new() -> Self {
        Choices(Vec::new())
    }

    /// Inserts `label` for `raw`, replacing any existing label for that key
    /// without disturbing its position (matches the "insertion order
    /// preserved" wording; a `VAL_` table with a duplicate key is malformed
    /// input, so last-write-wins here is a pragmatic choice, not a spec'd one).
    pub fn insert(&mut self, raw: i64, label: impl Into<String>) {
        let label = label.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == raw) {
            entry.1 = label;
        } else {
            self.0.push((raw, label));
        }
    }

    pub fn label_for(&self, raw: i64) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == raw)
            .map(|(_, v)| v.as_str())
    }

    pub fn raw_for(&self, label: &str) -> Option<i64> {
        self.0.iter().find(|(_, v)| v == label).map(|(k, _)| *k)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order_and_looks_up_both_directions() {
        let mut choices = Choices::new();
        choices.insert(1, "Enabled");
        choices.insert(0, "Disabled");

        assert_eq!(
            choices.iter().collect::<Vec<_>>(),
            vec![(1, "Enabled"), (0, "Disabled")]
        );
        assert_eq!(choices.label_for(1), Some("Enabled"));
        assert_eq!(choices.raw_for("Disabled"), Some(0));
        assert_eq!(choices.label_for(2), None);
    }
}
