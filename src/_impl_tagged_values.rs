use crate::TaggedValues;

impl TaggedValues {
    /// **(internal)** Record the value of one tagged group.
    pub(crate) fn push(&mut self, label: &str, value: bool) {
        self.entries.push((label.to_string(), value));
    }

    /// Number of recorded tagged groups (including duplicate labels).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the group with the given `label`. If several groups share the label,
    /// the one recorded last wins.
    pub fn get(&self, label: &str) -> Option<bool> {
        self.entries
            .iter()
            .rev()
            .find(|(l, _)| l == label)
            .map(|(_, value)| *value)
    }

    /// All recorded values, in recording order.
    pub fn values(&self) -> Vec<bool> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    /// Iterate over `(label, value)` pairs in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use crate::TaggedValues;

    #[test]
    fn tagged_values_last_label_wins() {
        let mut tagged = TaggedValues::default();
        assert!(tagged.is_empty());
        tagged.push("a|b", true);
        tagged.push("c", false);
        tagged.push("a|b", false);
        assert_eq!(3, tagged.len());
        assert_eq!(Some(false), tagged.get("a|b"));
        assert_eq!(Some(false), tagged.get("c"));
        assert_eq!(None, tagged.get("d"));
        assert_eq!(vec![true, false, false], tagged.values());
        let labels: Vec<&str> = tagged.iter().map(|(label, _)| label).collect();
        assert_eq!(vec!["a|b", "c", "a|b"], labels);
    }
}
