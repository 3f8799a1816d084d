use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::slide::Slide;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse deck file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("deck contains no slides")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    slides: Vec<Slide>,
}

/// The ordered, non-empty slide sequence for one presentation session.
/// Assembled once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn from_slides(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides })
    }

    /// Loads a deck from a TOML file with one `[[slides]]` table per slide.
    pub fn from_path(path: &Path) -> Result<Self, DeckError> {
        let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DeckFile = toml::from_str(&text).map_err(|source| DeckError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slides(file.slides)
    }

    /// The built-in nine-slide demo deck used when no deck file is given.
    pub fn builtin() -> Self {
        let slides = vec![
            Slide::new(1, "Every launch starts with a story", "blue")
                .with_subtitle("We help you tell yours")
                .with_content("A full-screen deck player that runs anywhere, with nothing to install")
                .first_slide(),
            Slide::new(2, "The problem", "red")
                .with_content("Great ideas die in cluttered slide tools and broken projector setups"),
            Slide::new(3, "The solution", "green")
                .with_content("One binary, one deck file, arrow keys. Nothing else to think about."),
            Slide::new(4, "How it works", "purple")
                .with_content("Slides are plain data. The player renders them and stays out of the way."),
            Slide::new(5, "For the audience", "yellow")
                .with_content("No loading spinners, no layout jumps, no surprises mid-presentation"),
            Slide::new(6, "The economics", "indigo")
                .with_content("A deck you write in five minutes and reuse for every pitch"),
            Slide::new(7, "The team", "pink")
                .with_content("Built by people who have given one too many presentations"),
            Slide::new(8, "Roadmap", "orange")
                .with_content("Speaker notes, timers, and remote control are on the list"),
            Slide::new(9, "The finale", "gray")
                .with_content("Thanks for watching. Questions welcome.")
                .mirror_effect(),
        ];
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_has_nine_slides() {
        let deck = Deck::builtin();
        assert_eq!(deck.len(), 9);
        assert!(deck.get(0).unwrap().is_first_slide);
        assert!(deck.get(8).unwrap().is_mirror_effect);
    }

    #[test]
    fn slide_ids_are_sequential_in_builtin_deck() {
        let deck = Deck::builtin();
        for (i, slide) in deck.slides().iter().enumerate() {
            assert_eq!(slide.id as usize, i + 1);
        }
    }

    #[test]
    fn parses_deck_file_with_optional_fields() {
        let text = r#"
            [[slides]]
            id = 1
            title = "Opening"
            subtitle = "hello"
            background = "blue"
            is_first_slide = true

            [[slides]]
            id = 2
            title = "Closing"
            content = "the end"
            background = "gray"
            is_mirror_effect = true
        "#;
        let file: DeckFile = toml::from_str(text).unwrap();
        let deck = Deck::from_slides(file.slides).unwrap();
        assert_eq!(deck.len(), 2);

        let first = deck.get(0).unwrap();
        assert_eq!(first.subtitle.as_deref(), Some("hello"));
        assert_eq!(first.content, None);
        assert!(first.is_first_slide);
        assert!(!first.is_mirror_effect);

        let last = deck.get(1).unwrap();
        assert_eq!(last.content.as_deref(), Some("the end"));
        assert!(last.is_mirror_effect);
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(Deck::from_slides(vec![]), Err(DeckError::Empty)));

        let file: DeckFile = toml::from_str("").unwrap();
        assert!(matches!(Deck::from_slides(file.slides), Err(DeckError::Empty)));
    }

    #[test]
    fn missing_deck_file_reports_io_error() {
        let err = Deck::from_path(Path::new("/nonexistent/deck.toml")).unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
    }
}
