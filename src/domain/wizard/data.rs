//! WizardData - accumulated form state for one open wizard instance.
//!
//! A wizard's data is a mapping from field key to value, merged across
//! steps. It is created empty when the wizard opens, mutated by each
//! step's input handlers, discarded on cancel, and handed once as a
//! read-only snapshot to the save callback on final submission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::AttachmentReference;

/// A single field value inside a wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Date(NaiveDate),
    Attachment(AttachmentReference),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns true for values a required-field check treats as unset:
    /// blank text and empty lists.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Returns the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the date content, if this is a date value.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the attachment, if this is an attachment value.
    pub fn as_attachment(&self) -> Option<&AttachmentReference> {
        match self {
            FieldValue::Attachment(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the nested list, if this is a list value.
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<AttachmentReference> for FieldValue {
    fn from(a: AttachmentReference) -> Self {
        FieldValue::Attachment(a)
    }
}

/// Accumulated form state, keyed by field name.
///
/// Keys form a fixed, wizard-specific schema known in advance; insertion
/// order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardData {
    fields: BTreeMap<String, FieldValue>,
}

impl WizardData {
    /// Creates empty wizard data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of set fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no field has been set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sets a field value, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Returns a field value, if set.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Removes a field value.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    /// Returns true when the field is missing or holds a blank value.
    pub fn is_blank(&self, key: &str) -> bool {
        self.fields.get(key).map_or(true, |v| v.is_blank())
    }

    /// Returns the text content of a field, if set.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Returns the numeric content of a field, if set.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_number)
    }

    /// Returns the boolean content of a field, if set.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FieldValue::as_flag)
    }

    /// Returns the date content of a field, if set.
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.get(key).and_then(FieldValue::as_date)
    }

    /// Returns the list content of a field, or an empty slice.
    pub fn list(&self, key: &str) -> &[FieldValue] {
        self.get(key).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    /// Returns the number of items in a list field (0 when unset).
    pub fn list_len(&self, key: &str) -> usize {
        self.list(key).len()
    }

    /// Appends a value to a list field, creating the list when absent.
    pub fn push_to_list(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let entry = self
            .fields
            .entry(key.into())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        match entry {
            FieldValue::List(items) => items.push(value.into()),
            other => *other = FieldValue::List(vec![value.into()]),
        }
    }

    /// Returns every attachment stored in a field (single or list).
    pub fn attachments(&self, key: &str) -> Vec<&AttachmentReference> {
        match self.get(key) {
            Some(FieldValue::Attachment(a)) => vec![a],
            Some(FieldValue::List(items)) => {
                items.iter().filter_map(FieldValue::as_attachment).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Returns a read-only copy handed to the save callback.
    pub fn snapshot(&self) -> WizardData {
        self.clone()
    }

    /// Returns the set field keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(name: &str, size: u64) -> AttachmentReference {
        AttachmentReference::new(name, size).unwrap()
    }

    #[test]
    fn new_data_is_empty() {
        let data = WizardData::new();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut data = WizardData::new();
        data.set("produto", "Monitor Multiparamétrico");
        data.set("quantidade", 4.0);
        data.set("urgente", true);

        assert_eq!(data.text("produto"), Some("Monitor Multiparamétrico"));
        assert_eq!(data.number("quantidade"), Some(4.0));
        assert_eq!(data.flag("urgente"), Some(true));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut data = WizardData::new();
        data.set("produto", "Antigo");
        data.set("produto", "Novo");
        assert_eq!(data.text("produto"), Some("Novo"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn missing_field_is_blank() {
        let data = WizardData::new();
        assert!(data.is_blank("nome_arquivo_principal"));
    }

    #[test]
    fn whitespace_text_is_blank() {
        let mut data = WizardData::new();
        data.set("nome_arquivo_principal", "   ");
        assert!(data.is_blank("nome_arquivo_principal"));

        data.set("nome_arquivo_principal", "registro.pdf");
        assert!(!data.is_blank("nome_arquivo_principal"));
    }

    #[test]
    fn empty_list_is_blank() {
        let mut data = WizardData::new();
        data.set("documentos", FieldValue::List(Vec::new()));
        assert!(data.is_blank("documentos"));

        data.push_to_list("documentos", attachment("manual.pdf", 100));
        assert!(!data.is_blank("documentos"));
    }

    #[test]
    fn number_zero_and_flag_false_are_not_blank() {
        let mut data = WizardData::new();
        data.set("valor", 0.0);
        data.set("aceito", false);
        assert!(!data.is_blank("valor"));
        assert!(!data.is_blank("aceito"));
    }

    #[test]
    fn push_to_list_creates_and_appends() {
        let mut data = WizardData::new();
        data.push_to_list("documentos", attachment("a.pdf", 1));
        data.push_to_list("documentos", attachment("b.pdf", 2));
        assert_eq!(data.list_len("documentos"), 2);
    }

    #[test]
    fn attachments_reads_single_and_list_fields() {
        let mut data = WizardData::new();
        data.set("laudo", attachment("laudo.pdf", 10));
        data.push_to_list("documentos", attachment("a.pdf", 1));
        data.push_to_list("documentos", attachment("b.pdf", 2));

        assert_eq!(data.attachments("laudo").len(), 1);
        assert_eq!(data.attachments("documentos").len(), 2);
        assert!(data.attachments("inexistente").is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_source() {
        let mut data = WizardData::new();
        data.set("produto", "Ventilador Pulmonar");

        let snapshot = data.snapshot();
        data.set("produto", "Alterado depois");

        assert_eq!(snapshot.text("produto"), Some("Ventilador Pulmonar"));
    }

    #[test]
    fn serializes_and_deserializes() {
        let mut data = WizardData::new();
        data.set("produto", "Oxímetro");
        data.set("quantidade", 2.0);

        let json = serde_json::to_string(&data).unwrap();
        let restored: WizardData = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, data);
    }
}
