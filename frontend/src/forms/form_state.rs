use std::collections::BTreeSet;

use leptos::*;

use super::validation::{FieldErrors, FieldValues, Schema};

/// Values, validation errors and touched fields of one page form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: FieldValues,
    errors: FieldErrors,
    touched: BTreeSet<String>,
}

impl FormState {
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Editing a field drops its stale error until the next blur or submit.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
    }

    pub fn blur(&mut self, schema: &Schema, name: &str) {
        self.touched.insert(name.to_string());
        match schema.validate_field(name, &self.values) {
            Some(message) => {
                self.errors.insert(name.to_string(), message);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    /// Validates every schema field. Returns true when the form is clean.
    pub fn submit(&mut self, schema: &Schema) -> bool {
        let names: Vec<String> = schema.field_names().map(str::to_string).collect();
        self.submit_fields(schema, names.iter().map(String::as_str))
    }

    /// Validates `names` only, leaving other errors as they are.
    pub fn submit_fields<'a>(
        &mut self,
        schema: &Schema,
        names: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        let mut clean = true;
        for name in names {
            self.blur(schema, name);
            clean &= !self.errors.contains_key(name);
        }
        clean
    }

    pub fn reset(&mut self, values: FieldValues) {
        *self = Self {
            values,
            ..Self::default()
        };
    }
}

/// Reactive wrapper pairing a [`FormState`] signal with its schema.
#[derive(Clone, Copy)]
pub struct FormHandle {
    state: RwSignal<FormState>,
    schema: StoredValue<Schema>,
}

impl FormHandle {
    pub fn new(schema: Schema, initial: FormState) -> Self {
        Self {
            state: create_rw_signal(initial),
            schema: store_value(schema),
        }
    }

    pub fn value(&self, name: &str) -> String {
        self.state.with(|s| s.value(name).to_string())
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.state.with(|s| s.error(name).map(str::to_string))
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn snapshot(&self) -> FieldValues {
        self.state.with_untracked(|s| s.values().clone())
    }

    pub fn set(&self, name: &str, value: String) {
        self.state.update(|s| s.set(name, value));
    }

    pub fn blur(&self, name: &str) {
        self.schema
            .with_value(|schema| self.state.update(|s| s.blur(schema, name)));
    }

    pub fn submit(&self) -> bool {
        let mut clean = false;
        self.schema
            .with_value(|schema| self.state.update(|s| clean = s.submit(schema)));
        clean
    }

    pub fn submit_fields(&self, names: &[&str]) -> bool {
        let mut clean = false;
        self.schema.with_value(|schema| {
            self.state
                .update(|s| clean = s.submit_fields(schema, names.iter().copied()))
        });
        clean
    }

    pub fn reset(&self, values: FieldValues) {
        self.state.update(|s| s.reset(values));
    }
}
