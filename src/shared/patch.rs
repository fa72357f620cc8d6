use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// Request DTOs mark these fields #[serde(default)] so that an omitted
// field deserializes to Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

/// PUT vs PATCH on the same resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    /// PUT: every required field must be supplied.
    Replace,
    /// PATCH: only the supplied fields change.
    Partial,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        city: PatchField<String>,
    }

    #[test]
    fn omitted_field_is_unset() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.city.is_unset());
    }

    #[test]
    fn explicit_null_is_null() {
        let body: Body = serde_json::from_str(r#"{"city": null}"#).unwrap();
        assert!(body.city.is_null());
    }

    #[test]
    fn value_is_kept() {
        let body: Body = serde_json::from_str(r#"{"city": "Oslo"}"#).unwrap();
        assert_eq!(body.city.as_value().map(String::as_str), Some("Oslo"));
    }
}
