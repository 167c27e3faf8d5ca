use std::collections::hash_map::Entry;
use std::fmt;

use slab::Slab;
use thiserror::Error;

use crate::types::{Int, Label, LineNumber, Var};

type Key = usize; // slab slot holding the variable's value
type BindingIndex = fnv::FnvHashMap<Var, Key>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("The variable {name} is already defined.")]
    AlreadyDeclared { name: Var },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("The label {label} is already defined at line {line}.")]
    AlreadyDefined { label: Label, line: LineNumber },
}

/// Variable name to value, one flat namespace for the whole run.
///
/// Names are never removed; iteration follows declaration order.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: Slab<Int>,
    index: BindingIndex,
    order: Vec<Var>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, name: &str) -> Option<Int> {
        self.index
            .get(name)
            .and_then(|&key| self.values.get(key).copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Binds `name` once; a second declaration of the same name fails.
    pub fn declare(&mut self, name: &Var, value: Int) -> Result<(), BindingError> {
        match self.index.entry(name.clone()) {
            Entry::Occupied(_) => Err(BindingError::AlreadyDeclared { name: name.clone() }),
            Entry::Vacant(v) => {
                v.insert(self.values.insert(value));
                self.order.push(name.clone());
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Var, Int)> {
        self.order
            .iter()
            .filter_map(move |name| self.load(name).map(|value| (name, value)))
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Var\tValue")?;
        writeln!(f, "---------------")?;
        for (name, value) in self.iter() {
            writeln!(f, "{}\t{}", name, value)?;
        }
        Ok(())
    }
}

/// Label name to the line it marks. Filled while loading, read-only after.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    lines: fnv::FnvHashMap<Label, LineNumber>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, label: &str) -> Option<LineNumber> {
        self.lines.get(label).copied()
    }

    pub fn define(&mut self, label: &str, line: LineNumber) -> Result<(), LabelError> {
        match self.lines.entry(label.to_string()) {
            Entry::Occupied(v) => Err(LabelError::AlreadyDefined {
                label: label.to_string(),
                line: *v.get(),
            }),
            Entry::Vacant(v) => {
                v.insert(line);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Labels ordered by the line they mark.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, LineNumber)> {
        let mut labels: Vec<_> = self.lines.iter().map(|(l, &n)| (l, n)).collect();
        labels.sort_by_key(|&(_, line)| line);
        labels.into_iter()
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Label\tValue")?;
        writeln!(f, "---------------")?;
        for (label, line) in self.iter() {
            writeln!(f, "{}\t{}", label, line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_binds_once() {
        let mut bindings = Bindings::new();
        bindings.declare(&"A".into(), 5).unwrap();

        assert_eq!(
            bindings.declare(&"A".into(), 2),
            Err(BindingError::AlreadyDeclared { name: "A".into() })
        );
        assert_eq!(bindings.load("A"), Some(5));
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn bindings_iterate_in_declaration_order() {
        let mut bindings = Bindings::new();
        for (name, value) in &[("Z", 1), ("A", 2), ("M", 3)] {
            bindings.declare(&name.to_string(), *value).unwrap();
        }

        let names: Vec<_> = bindings.iter().map(|(n, v)| (n.as_str(), v)).collect();
        assert_eq!(names, vec![("Z", 1), ("A", 2), ("M", 3)]);
        assert_eq!(
            bindings.to_string(),
            "Var\tValue\n---------------\nZ\t1\nA\t2\nM\t3\n"
        );
    }

    #[test]
    fn duplicate_label_reports_first_definition() {
        let mut labels = Labels::new();
        labels.define("LOOP", 3).unwrap();

        assert_eq!(
            labels.define("LOOP", 7),
            Err(LabelError::AlreadyDefined {
                label: "LOOP".into(),
                line: 3
            })
        );
        assert_eq!(labels.get("LOOP"), Some(3));
    }

    #[test]
    fn labels_display_in_line_order() {
        let mut labels = Labels::new();
        labels.define("END", 9).unwrap();
        labels.define("START", 1).unwrap();

        assert_eq!(
            labels.to_string(),
            "Label\tValue\n---------------\nSTART\t1\nEND\t9\n"
        );
    }
}
