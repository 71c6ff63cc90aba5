use crate::catalog::{Presentation, ProjectRecord};

/// `rel` value for links that open in a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// What activating a project card does, decided once when the card is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    ExternalLink(String),
    Callback(String),
}

impl CardAction {
    /// An external website wins over any overlay the record could open.
    pub fn for_record(record: &ProjectRecord) -> Self {
        match &record.website {
            Some(url) => CardAction::ExternalLink(url.clone()),
            None => CardAction::Callback(record.id.clone()),
        }
    }

    pub fn hover_label(&self, presentation: Presentation) -> &'static str {
        match (self, presentation) {
            (CardAction::ExternalLink(_), _) => "Visit Website",
            (CardAction::Callback(_), Presentation::Detail) => "View Project",
            (CardAction::Callback(_), Presentation::Gallery) => "View Gallery",
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, CardAction::ExternalLink(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_record;

    #[test]
    fn test_callback_without_website() {
        let record = test_record("dalani", 5);
        let action = CardAction::for_record(&record);
        assert_eq!(action, CardAction::Callback("dalani".to_string()));
        assert!(!action.is_navigation());
        assert_eq!(action.hover_label(Presentation::Detail), "View Project");
        assert_eq!(action.hover_label(Presentation::Gallery), "View Gallery");
    }

    #[test]
    fn test_website_takes_priority() {
        let mut record = test_record("metropolis", 1);
        record.website = Some("https://example.com".to_string());
        let action = CardAction::for_record(&record);
        assert_eq!(
            action,
            CardAction::ExternalLink("https://example.com".to_string())
        );
        assert!(action.is_navigation());
        assert_eq!(action.hover_label(Presentation::Detail), "Visit Website");
    }
}
