//! The normalized part form.
//!
//! The field set is fixed: construction decides the keys once and only the
//! values and enabled flags change afterwards. The search workflow is the
//! only writer.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Description,
    Revision,
    Keywords,
    SupplierName,
    SupplierPartNumber,
    SupplierLink,
    ManufacturerName,
    ManufacturerPartNumber,
    Datasheet,
    Image,
}

impl FormField {
    /// All fields, in display and population order.
    pub const ALL: [Self; 11] = [
        Self::Name,
        Self::Description,
        Self::Revision,
        Self::Keywords,
        Self::SupplierName,
        Self::SupplierPartNumber,
        Self::SupplierLink,
        Self::ManufacturerName,
        Self::ManufacturerPartNumber,
        Self::Datasheet,
        Self::Image,
    ];

    /// Canonical snake_case key, as used by the catalog translation layer.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Revision => "revision",
            Self::Keywords => "keywords",
            Self::SupplierName => "supplier_name",
            Self::SupplierPartNumber => "supplier_part_number",
            Self::SupplierLink => "supplier_link",
            Self::ManufacturerName => "manufacturer_name",
            Self::ManufacturerPartNumber => "manufacturer_part_number",
            Self::Datasheet => "datasheet",
            Self::Image => "image",
        }
    }

    /// Human-readable label for the form row.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Revision => "Revision",
            Self::Keywords => "Keywords",
            Self::SupplierName => "Supplier Name",
            Self::SupplierPartNumber => "Supplier Part Number",
            Self::SupplierLink => "Supplier Link",
            Self::ManufacturerName => "Manufacturer Name",
            Self::ManufacturerPartNumber => "Manufacturer Part Number",
            Self::Datasheet => "Datasheet",
            Self::Image => "Image",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub enabled: bool,
}

/// Fixed-key form state: one [`FieldState`] per [`FormField`], in
/// [`FormField::ALL`] order. All fields start empty and disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    fields: [FieldState; FormField::ALL.len()],
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            fields: std::array::from_fn(|_| FieldState::default()),
        }
    }

    pub const fn get(&self, field: FormField) -> &FieldState {
        &self.fields[field as usize]
    }

    /// Overwrite a field's value. Editing is only meaningful once the field
    /// has been enabled; disabled fields are left untouched.
    pub fn set_value(&mut self, field: FormField, value: String) {
        let state = &mut self.fields[field as usize];
        if state.enabled {
            state.value = value;
        }
    }

    /// Enable every field without touching any value. This is the manual
    /// entry escape hatch for an empty query.
    pub fn enable_all(&mut self) {
        for state in &mut self.fields {
            state.enabled = true;
        }
    }

    /// Populate the form from a translated search result.
    ///
    /// Every field takes the translated value when present (an absent key
    /// leaves the value empty) and is enabled regardless of whether a value
    /// was found. Lookup is by key, so a sparse mapping can never fault.
    pub fn apply(&mut self, values: &HashMap<FormField, String>) {
        for field in FormField::ALL {
            let state = &mut self.fields[field as usize];
            state.value = values.get(&field).cloned().unwrap_or_default();
            state.enabled = true;
        }
    }

    /// Fields in display order with their current state.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldState)> {
        FormField::ALL
            .into_iter()
            .map(|field| (field, &self.fields[field as usize]))
    }

    /// True once any field has been enabled.
    pub fn is_editable(&self) -> bool {
        self.fields.iter().any(|state| state.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_disabled() {
        let form = SearchForm::new();
        for (_, state) in form.iter() {
            assert_eq!(state.value, "");
            assert!(!state.enabled);
        }
        assert!(!form.is_editable());
    }

    #[test]
    fn enable_all_preserves_values() {
        let mut form = SearchForm::new();
        form.apply(&HashMap::from([(FormField::Name, "Resistor 10k".into())]));
        form.enable_all();

        assert_eq!(form.get(FormField::Name).value, "Resistor 10k");
        for (_, state) in form.iter() {
            assert!(state.enabled);
        }
    }

    #[test]
    fn apply_fills_present_keys_and_clears_missing_ones() {
        let mut form = SearchForm::new();
        form.apply(&HashMap::from([
            (FormField::Name, "Resistor 10k".to_string()),
            (FormField::SupplierPartNumber, "C12345".to_string()),
        ]));

        assert_eq!(form.get(FormField::Name).value, "Resistor 10k");
        assert_eq!(form.get(FormField::SupplierPartNumber).value, "C12345");
        for (field, state) in form.iter() {
            assert!(state.enabled, "{field:?} should be enabled after apply");
            if field != FormField::Name && field != FormField::SupplierPartNumber {
                assert_eq!(state.value, "");
            }
        }
    }

    #[test]
    fn set_value_ignores_disabled_fields() {
        let mut form = SearchForm::new();
        form.set_value(FormField::Name, "typed too early".to_string());
        assert_eq!(form.get(FormField::Name).value, "");

        form.enable_all();
        form.set_value(FormField::Name, "typed".to_string());
        assert_eq!(form.get(FormField::Name).value, "typed");
    }
}
