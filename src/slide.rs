use serde::Deserialize;

/// One slide of the deck. Immutable after loading; the renderer resolves
/// `background` to a gradient and the flags to their decorative effects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub background: String,
    #[serde(default)]
    pub is_first_slide: bool,
    #[serde(default)]
    pub is_mirror_effect: bool,
}

impl Slide {
    pub fn new(id: u32, title: &str, background: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            subtitle: None,
            content: None,
            background: background.to_string(),
            is_first_slide: false,
            is_mirror_effect: false,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn first_slide(mut self) -> Self {
        self.is_first_slide = true;
        self
    }

    pub fn mirror_effect(mut self) -> Self {
        self.is_mirror_effect = true;
        self
    }
}
