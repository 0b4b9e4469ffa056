//! Composite-key signatures and the indexes keyed by them.

use mess_core::{KeyPart, Row};
use std::collections::HashMap;
use std::fmt;

/// A row's values for a fixed, sorted list of key fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<KeyPart>);

impl Signature {
    /// Build the signature of `row` over `fields`; missing fields read as NULL.
    pub fn of(fields: &[String], row: &Row) -> Self {
        Self(
            fields
                .iter()
                .map(|field| row.value_or_null(field).key_part())
                .collect(),
        )
    }

    /// Values making up the signature, in key-field order.
    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }
}

/// Maps the signatures of one key (the primary key or one unique-key group)
/// to the slot of the live row owning them.
#[derive(Debug, Clone)]
pub(crate) struct KeyIndex {
    label: String,
    fields: Vec<String>,
    slots: HashMap<Signature, usize>,
}

impl KeyIndex {
    pub(crate) fn primary(fields: &[String]) -> Self {
        Self::new("primary key", fields)
    }

    pub(crate) fn unique(fields: &[String]) -> Self {
        Self::new("unique key", fields)
    }

    fn new(kind: &str, fields: &[String]) -> Self {
        Self {
            label: format!("{kind} ({})", fields.join(", ")),
            fields: fields.to_vec(),
            slots: HashMap::new(),
        }
    }

    /// e.g. `primary key (id)` or `unique key (email, tenant)`
    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn signature(&self, row: &Row) -> Signature {
        Signature::of(&self.fields, row)
    }

    pub(crate) fn slot_of(&self, signature: &Signature) -> Option<usize> {
        self.slots.get(signature).copied()
    }

    pub(crate) fn insert(&mut self, signature: Signature, slot: usize) {
        self.slots.insert(signature, slot);
    }

    pub(crate) fn remove(&mut self, signature: &Signature) -> Option<usize> {
        self.slots.remove(signature)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Signature, usize)> {
        self.slots.iter().map(|(sig, slot)| (sig, *slot))
    }

    /// Render a signature as `field=value` pairs for error messages.
    pub(crate) fn describe(&self, signature: &Signature) -> String {
        self.fields
            .iter()
            .zip(signature.parts())
            .map(|(field, part)| format!("{field}={part}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "({})", parts.join(", "))
    }
}
