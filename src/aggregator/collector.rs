//! Deduplicated multi-valued accumulation per category.

use crate::parser::{Assignment, Value};
use indexmap::IndexSet;
use std::collections::BTreeMap;

/// Distinct values of one category, in first-arrival order
pub type ValueSet = IndexSet<Value>;

/// Mapping category name -> set of values.
///
/// Categories iterate in sorted order; values keep first-arrival order for
/// display but set membership never depends on arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryValues {
    sets: BTreeMap<String, ValueSet>,
}

impl CategoryValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `category`.
    ///
    /// A missing value is a no-op and never creates an empty entry.
    pub fn accumulate(&mut self, category: &str, value: Option<&Value>) {
        let Some(value) = value else {
            return;
        };

        match self.sets.get_mut(category) {
            Some(set) => {
                set.insert(value.clone());
            }
            None => {
                self.sets
                    .insert(category.to_string(), IndexSet::from([value.clone()]));
            }
        }
    }

    /// Accumulate every assignment of a list
    pub fn accumulate_all<'a, A>(&mut self, assignments: impl IntoIterator<Item = &'a A>)
    where
        A: Assignment + 'a,
    {
        for assignment in assignments {
            self.accumulate(assignment.category_name(), assignment.value());
        }
    }

    pub fn get(&self, category: &str) -> Option<&ValueSet> {
        self.sets.get(category)
    }

    /// Category names in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueSet)> {
        self.sets.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_is_idempotent() {
        let mut values = CategoryValues::new();
        values.accumulate("temperature", Some(&Value::number(30)));
        values.accumulate("temperature", Some(&Value::number(30)));
        assert_eq!(values.get("temperature").unwrap().len(), 1);

        values.accumulate("temperature", Some(&Value::number(25)));
        assert_eq!(values.get("temperature").unwrap().len(), 2);
    }

    #[test]
    fn test_missing_value_creates_no_entry() {
        let mut values = CategoryValues::new();
        values.accumulate("temperature", None);
        assert!(values.is_empty());
        assert!(values.get("temperature").is_none());
    }

    #[test]
    fn test_order_independent_membership() {
        let mut a = CategoryValues::new();
        a.accumulate("strain", Some(&Value::text("Col-0")));
        a.accumulate("strain", Some(&Value::text("Ler")));

        let mut b = CategoryValues::new();
        b.accumulate("strain", Some(&Value::text("Ler")));
        b.accumulate("strain", Some(&Value::text("Col-0")));

        let sa = a.get("strain").unwrap();
        let sb = b.get("strain").unwrap();
        assert_eq!(sa.len(), sb.len());
        assert!(sa.iter().all(|v| sb.contains(v)));
    }

    #[test]
    fn test_term_and_text_with_same_label_are_distinct() {
        let mut values = CategoryValues::new();
        values.accumulate("organism", Some(&Value::term("Arabidopsis")));
        values.accumulate("organism", Some(&Value::text("Arabidopsis")));
        assert_eq!(values.get("organism").unwrap().len(), 2);
    }
}
