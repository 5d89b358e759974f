use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GLITCH_NOTE_CHANCE, DEFAULT_TOTAL_EVIDENCE};

/// Placement of an evidence hotspot on the left-page image, as CSS offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Position {
    pub top: String,
    pub left: String,
}

/// A collectible hotspot embedded in an entry's image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSpot {
    pub id: String,
    pub position: Position,
    pub description: String,
    #[serde(default)]
    pub pulsing: bool,
}

/// A branch out of an entry. The target id is resolved at navigation time;
/// a dangling target fails there, never at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub next: String,
    #[serde(default)]
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    #[default]
    Paragraph,
    Header,
    Special,
}

/// One rendered block of right-page text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub kind: BlockKind,
    pub text: String,
}

/// One narrative page of the branching story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub act: u32,
    pub left_image: String,
    #[serde(default)]
    pub ambient_sound: Option<String>,
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub evidence: Vec<EvidenceSpot>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A terminal page reached via a choice. No hotspots, no outgoing branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ending {
    pub id: String,
    pub title: String,
    pub left_image: String,
    pub content: Vec<ContentBlock>,
}

/// Evidence in its collected form, as shown in the investigation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// A timestamped line in the investigation notes feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub timestamp: String,
    pub text: String,
}

/// Story-wide tuning carried inside the content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_total_evidence")]
    pub total_evidence: u32,
    /// Chance that a glitch pulse leaves a whisper in the notes feed.
    #[serde(default = "Settings::default_glitch_note_chance")]
    pub glitch_note_chance: f32,
    /// Words whose highlighted spans also fire the static burst.
    #[serde(default = "Settings::default_static_trigger_words")]
    pub static_trigger_words: Vec<String>,
    /// Cryptic lines the glitch pulse may append as `[UNKNOWN SOURCE]` notes.
    #[serde(default = "Settings::default_whispers")]
    pub whispers: Vec<String>,
}

impl Settings {
    const fn default_total_evidence() -> u32 {
        DEFAULT_TOTAL_EVIDENCE
    }

    const fn default_glitch_note_chance() -> f32 {
        DEFAULT_GLITCH_NOTE_CHANCE
    }

    fn default_static_trigger_words() -> Vec<String> {
        [
            "static",
            "signal",
            "radio",
            "transmission",
            "noise",
            "broadcast",
            "frequency",
        ]
        .map(str::to_string)
        .to_vec()
    }

    fn default_whispers() -> Vec<String> {
        [
            "They're watching through the static.",
            "The signal grows stronger when they're mentioned.",
            "Don't look directly at the distortions.",
            "They existed between frequencies before finding us.",
            "The town isn't gone. It's elsewhere.",
        ]
        .map(str::to_string)
        .to_vec()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            total_evidence: Self::default_total_evidence(),
            glitch_note_chance: Self::default_glitch_note_chance(),
            static_trigger_words: Self::default_static_trigger_words(),
            whispers: Self::default_whispers(),
        }
    }
}

/// A resolved page: either a story entry or a terminal ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page<'a> {
    Entry(&'a Entry),
    Ending(&'a Ending),
}

impl<'a> Page<'a> {
    #[must_use]
    pub fn id(&self) -> &'a str {
        match self {
            Self::Entry(entry) => entry.id.as_str(),
            Self::Ending(ending) => ending.id.as_str(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        match self {
            Self::Entry(entry) => entry.title.as_str(),
            Self::Ending(ending) => ending.title.as_str(),
        }
    }

    #[must_use]
    pub fn left_image(&self) -> &'a str {
        match self {
            Self::Entry(entry) => entry.left_image.as_str(),
            Self::Ending(ending) => ending.left_image.as_str(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &'a [ContentBlock] {
        match self {
            Self::Entry(entry) => &entry.content,
            Self::Ending(ending) => &ending.content,
        }
    }

    #[must_use]
    pub const fn is_ending(&self) -> bool {
        matches!(self, Self::Ending(_))
    }
}

/// Container for the whole story content table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StoryData {
    #[serde(default)]
    pub settings: Settings,
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub endings: Vec<Ending>,
    #[serde(default)]
    pub initial_evidence: Vec<EvidenceRecord>,
    #[serde(default)]
    pub initial_notes: Vec<Note>,
}

impl StoryData {
    /// Create empty story data (useful for tests and as a load fallback).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            settings: Settings::default(),
            entries: Vec::new(),
            endings: Vec::new(),
            initial_evidence: Vec::new(),
            initial_notes: Vec::new(),
        }
    }

    /// Load story data from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid story.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn ending(&self, id: &str) -> Option<&Ending> {
        self.endings.iter().find(|ending| ending.id == id)
    }

    /// Resolve a page id to its tagged variant. Entries win lookup ties.
    #[must_use]
    pub fn page(&self, id: &str) -> Option<Page<'_>> {
        self.entry(id)
            .map(Page::Entry)
            .or_else(|| self.ending(id).map(Page::Ending))
    }

    /// First entry in authoring order; where the cover opens to.
    #[must_use]
    pub fn first_entry(&self) -> Option<&Entry> {
        self.entries.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_data_from_json_applies_defaults() {
        let json = r#"{
            "entries": [
                {
                    "id": "intro",
                    "title": "Case File",
                    "left_image": "town-overview",
                    "content": [
                        { "text": "The town is silent." },
                        { "kind": "header", "text": "STATUS: Active" }
                    ]
                }
            ]
        }"#;

        let data = StoryData::from_json(json).unwrap();
        assert_eq!(data.entries.len(), 1);
        let entry = &data.entries[0];
        assert_eq!(entry.content[0].kind, BlockKind::Paragraph);
        assert_eq!(entry.content[1].kind, BlockKind::Header);
        assert!(entry.evidence.is_empty());
        assert!(entry.choices.is_empty());
        assert_eq!(data.settings.total_evidence, DEFAULT_TOTAL_EVIDENCE);
        assert_eq!(data.settings.whispers.len(), 5);
    }

    #[test]
    fn page_lookup_is_tagged() {
        let json = r#"{
            "entries": [
                { "id": "001", "title": "Road", "left_image": "road", "content": [] }
            ],
            "endings": [
                { "id": "ending-a", "title": "The Book Closes", "left_image": "book", "content": [] }
            ]
        }"#;
        let data = StoryData::from_json(json).unwrap();

        let entry = data.page("001").unwrap();
        assert!(!entry.is_ending());
        assert_eq!(entry.title(), "Road");

        let ending = data.page("ending-a").unwrap();
        assert!(ending.is_ending());
        assert_eq!(ending.left_image(), "book");

        assert!(data.page("does-not-exist").is_none());
    }

    #[test]
    fn choice_flag_defaults_to_none() {
        let choice: Choice =
            serde_json::from_str(r#"{ "text": "Press on", "next": "002" }"#).unwrap();
        assert_eq!(choice.flag, None);
    }
}
