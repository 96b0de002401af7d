use crate::VariableOrder;
use fxhash::FxHashMap;

impl VariableOrder {
    /// Create a new order from the given variable names. Duplicate names are ignored.
    ///
    /// The names are sorted case-insensitively. Names that differ only in case are ordered
    /// using the standard (case-sensitive) string ordering, so the result never depends
    /// on the iteration order of `names`.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> VariableOrder {
        let mut var_names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        var_names.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        var_names.dedup();
        let var_index_mapping: FxHashMap<String, usize> = var_names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();
        VariableOrder {
            var_names,
            var_index_mapping,
        }
    }

    /// Number of variables in this order.
    pub fn num_vars(&self) -> usize {
        self.var_names.len()
    }

    /// Column index of the given variable, if it is part of this order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.var_index_mapping.get(name).cloned()
    }

    /// Name of the variable at the given column index.
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.var_names.get(index).map(|name| name.as_str())
    }

    /// All variable names in column order.
    pub fn names(&self) -> &[String] {
        &self.var_names
    }
}
