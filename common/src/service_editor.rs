//! Bindings rendered by the service editor.

use crate::catalog_service::{FormatOption, ServiceDraft};

/// The "Format" select of the advanced settings. Options are passed through
/// untouched and the value is the draft's format as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSelector {
    pub value: Option<String>,
    pub options: Vec<FormatOption>,
}

impl FormatSelector {
    /// `None` unless the draft shows its advanced settings.
    pub fn bind(draft: &ServiceDraft, options: &[FormatOption]) -> Option<Self> {
        if !draft.show_advanced_settings {
            return None;
        }
        Some(Self { value: draft.format.clone(), options: options.to_vec() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service::ServiceType;

    fn format_options() -> Vec<FormatOption> {
        vec![FormatOption::new("image/png8", "image/png8"), FormatOption::new("image/jpeg", "image/jpeg")]
    }

    fn draft() -> ServiceDraft {
        ServiceDraft {
            service_type: ServiceType::Csw,
            url: "url".to_string(),
            title: "csw".to_string(),
            old_service: Some("csw".to_string()),
            show_advanced_settings: true,
            format: Some("image/png8".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn selector_binds_draft_format_and_options() {
        let options = format_options();
        let selector = FormatSelector::bind(&draft(), &options).unwrap();
        assert_eq!(selector.value.as_deref(), Some("image/png8"));
        assert_eq!(selector.options, options);
    }

    #[test]
    fn options_are_not_filtered_by_value() {
        let options = vec![FormatOption::new("JPEG", "image/jpeg"), FormatOption::new("JPEG", "image/jpeg")];
        let mut draft = draft();
        draft.format = Some("image/vnd.jpeg-png".to_string());
        let selector = FormatSelector::bind(&draft, &options).unwrap();
        assert_eq!(selector.value.as_deref(), Some("image/vnd.jpeg-png"));
        assert_eq!(selector.options, options);
    }

    #[test]
    fn hidden_without_advanced_settings() {
        let mut draft = draft();
        draft.show_advanced_settings = false;
        assert_eq!(FormatSelector::bind(&draft, &format_options()), None);
        assert_eq!(FormatSelector::bind(&ServiceDraft::default(), &[]), None);
    }
}
