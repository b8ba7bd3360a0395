//! Notification value object

use crate::domain::error::ContentError;

use super::Sound;

/// A single desktop notification.
/// Immutable and validated on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    title: String,
    subtitle: Option<String>,
    text: Option<String>,
    sound: Sound,
}

impl Notification {
    /// Create a notification with the given title.
    ///
    /// Fails if the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }
        Ok(Self {
            title,
            subtitle: None,
            text: None,
            sound: Sound::None,
        })
    }

    /// Set the subtitle. Empty strings are treated as absent.
    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = non_empty(subtitle);
        self
    }

    /// Set the informative text. Empty strings are treated as absent.
    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = non_empty(text);
        self
    }

    /// Set the sound
    pub fn with_sound(mut self, sound: Sound) -> Self {
        self.sound = sound;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn sound(&self) -> &Sound {
        &self.sound
    }

    /// Body for backends without a subtitle field: subtitle and text on separate lines
    pub fn flattened_body(&self) -> String {
        match (self.subtitle(), self.text()) {
            (Some(subtitle), Some(text)) => format!("{}\n{}", subtitle, text),
            (Some(subtitle), None) => subtitle.to_string(),
            (None, Some(text)) => text.to_string(),
            (None, None) => String::new(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_only() {
        let n = Notification::new("Build finished").unwrap();
        assert_eq!(n.title(), "Build finished");
        assert!(n.subtitle().is_none());
        assert!(n.text().is_none());
        assert_eq!(n.sound(), &Sound::None);
    }

    #[test]
    fn blank_title_rejected() {
        assert_eq!(Notification::new(""), Err(ContentError::EmptyTitle));
        assert_eq!(Notification::new("   "), Err(ContentError::EmptyTitle));
    }

    #[test]
    fn empty_optional_fields_are_dropped() {
        let n = Notification::new("t")
            .unwrap()
            .with_subtitle(Some(String::new()))
            .with_text(Some(String::new()));
        assert!(n.subtitle().is_none());
        assert!(n.text().is_none());
    }

    #[test]
    fn all_fields() {
        let n = Notification::new("t")
            .unwrap()
            .with_subtitle(Some("s".to_string()))
            .with_text(Some("m".to_string()))
            .with_sound(Sound::Default);
        assert_eq!(n.subtitle(), Some("s"));
        assert_eq!(n.text(), Some("m"));
        assert!(n.sound().is_audible());
    }

    #[test]
    fn flattened_body_variants() {
        let base = Notification::new("t").unwrap();
        assert_eq!(base.flattened_body(), "");
        assert_eq!(
            base.clone()
                .with_subtitle(Some("sub".to_string()))
                .flattened_body(),
            "sub"
        );
        assert_eq!(
            base.clone().with_text(Some("body".to_string())).flattened_body(),
            "body"
        );
        assert_eq!(
            base.with_subtitle(Some("sub".to_string()))
                .with_text(Some("body".to_string()))
                .flattened_body(),
            "sub\nbody"
        );
    }
}
