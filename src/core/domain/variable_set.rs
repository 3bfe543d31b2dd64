//! VariableSet type.
//!
//! Ordered collection of variables with unique keys. Insertion order is the
//! display and export order.

use serde::{Deserialize, Serialize};

use super::Variable;

/// Ordered, key-unique set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Variable>", into = "Vec<Variable>")]
pub struct VariableSet {
    records: Vec<Variable>,
}

impl VariableSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from records, keeping the first occurrence of each key.
    pub fn from_records(records: impl IntoIterator<Item = Variable>) -> Self {
        let mut set = Self::new();
        for record in records {
            if !set.contains(record.key()) {
                set.records.push(record);
            }
        }
        set
    }

    /// Look up a variable by key.
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.records.iter().find(|v| v.key() == key)
    }

    /// Index of the variable with `key`, if present.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|v| v.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.records.iter()
    }

    /// All keys in order.
    pub fn keys(&self) -> Vec<&str> {
        self.records.iter().map(Variable::key).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Subset matching `key`, or a copy of the whole set when `key` is `None`.
    pub fn filter_key(&self, key: Option<&str>) -> VariableSet {
        match key {
            Some(key) => Self::from_records(self.get(key).cloned()),
            None => self.clone(),
        }
    }

    /// Append a record whose key is not yet present.
    ///
    /// Returns `false` and leaves the set untouched if the key exists.
    pub(crate) fn push(&mut self, record: Variable) -> bool {
        if self.contains(record.key()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Replace the record at `index`, keeping its position.
    pub(crate) fn replace(&mut self, index: usize, record: Variable) {
        self.records[index] = record;
    }
}

impl From<Vec<Variable>> for VariableSet {
    fn from(records: Vec<Variable>) -> Self {
        Self::from_records(records)
    }
}

impl From<VariableSet> for Vec<Variable> {
    fn from(set: VariableSet) -> Self {
        set.records
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for VariableSet {
    type Item = Variable;
    type IntoIter = std::vec::IntoIter<Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
