use std::collections::BTreeMap;

use tracing::warn;

use crate::core::constants::{FONT_FAMILY_VARIABLE, LOGO_URL_VARIABLE};
use crate::core::record::BrandingRecord;
use crate::core::roles::ColorRole;

/// Flat variable-name -> value mapping derived from a branding record.
/// The transform is deterministic, so resolving the same organization twice
/// yields the same keys and re-application is a pure overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariableSet {
    vars: BTreeMap<String, String>,
}

impl StyleVariableSet {
    pub fn from_record(record: &BrandingRecord) -> StyleVariableSet {
        let mut vars = BTreeMap::new();

        for (key, value) in &record.colors {
            match ColorRole::parse(key) {
                Some(role) => {
                    vars.insert(role.variable_name(), value.clone());
                }
                None => {
                    // unrecognized keys stop here, they never reach the scope
                    warn!(organization = %record.organization, key = %key, "rejected unknown color role");
                }
            }
        }

        if let Some(font) = &record.font_family {
            vars.insert(FONT_FAMILY_VARIABLE.to_string(), font.clone());
        }
        if let Some(logo) = &record.logo_url {
            vars.insert(LOGO_URL_VARIABLE.to_string(), logo.clone());
        }

        StyleVariableSet { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::record::OrganizationId;

    fn record_with_colors(pairs: &[(&str, &str)]) -> BrandingRecord {
        let colors: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BrandingRecord {
            organization: OrganizationId::new("clinic-a"),
            colors,
            font_family: None,
            logo_url: None,
        }
    }

    #[test]
    fn transform_maps_each_role_to_one_variable() {
        let record = record_with_colors(&[("primary", "#112233"), ("danger", "#ff0000")]);
        let set = StyleVariableSet::from_record(&record);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("--color-primary"), Some("#112233"));
        assert_eq!(set.get("--color-danger"), Some("#ff0000"));
    }

    #[test]
    fn transform_drops_unknown_roles() {
        let record = record_with_colors(&[("primary", "#112233"), ("sidebar-glow", "#00ff00")]);
        let set = StyleVariableSet::from_record(&record);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("--color-sidebar-glow"), None);
    }

    #[test]
    fn transform_includes_font_and_logo_when_present() {
        let mut record = record_with_colors(&[("surface", "#fafafa")]);
        record.font_family = Some("Inter, sans-serif".to_string());
        record.logo_url = Some("https://cdn.example/clinic-a.svg".to_string());

        let set = StyleVariableSet::from_record(&record);
        assert_eq!(set.get("--font-family"), Some("Inter, sans-serif"));
        assert_eq!(set.get("--logo-url"), Some("https://cdn.example/clinic-a.svg"));
    }

    #[test]
    fn transform_is_deterministic() {
        let record = record_with_colors(&[("primary", "#112233"), ("accent", "#334455")]);
        assert_eq!(
            StyleVariableSet::from_record(&record),
            StyleVariableSet::from_record(&record)
        );
    }
}
