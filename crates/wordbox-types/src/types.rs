use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}

/// Font preference, applied by the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Font {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

impl Font {
    pub fn as_str(self) -> &'static str {
        match self {
            Font::SansSerif => "sans-serif",
            Font::Serif => "serif",
            Font::Monospace => "monospace",
        }
    }

    pub const ALL: [Font; 3] = [Font::SansSerif, Font::Serif, Font::Monospace];
}

impl FromStr for Font {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sans-serif" | "sans" => Ok(Font::SansSerif),
            "serif" => Ok(Font::Serif),
            "monospace" | "mono" => Ok(Font::Monospace),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preference value: {0}")]
pub struct UnknownPreference(pub String);

/// Lookup failure as seen by the rest of the app. HTTP errors, transport
/// errors and malformed payloads all collapse into this one kind; the
/// underlying cause is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no definitions found")]
pub struct NotFound;

/// One dictionary entry as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupEntry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(rename = "sourceUrls", default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Entry shaped for display: phonetic and audio already selected,
/// definition and synonym lists already truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEntry {
    pub word: String,
    /// Always present, possibly empty. The phonetic line is rendered
    /// even when blank.
    pub phonetic: String,
    /// The audio control is shown iff this is `Some`.
    pub audio_url: Option<String>,
    pub meanings: Vec<RenderedMeaning>,
    pub source: SourceLink,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMeaning {
    pub part_of_speech: String,
    pub definitions: Vec<RenderedDefinition>,
    /// Empty means the synonyms line is omitted entirely.
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDefinition {
    pub definition: String,
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceLink {
    pub label: String,
    /// `None` renders a non-navigating fallback link.
    pub href: Option<String>,
}

impl RenderedEntry {
    /// Content shown on initial load and whenever the search input is
    /// cleared. No audio selection: the play control stays hidden.
    pub fn fallback() -> Self {
        RenderedEntry {
            word: "keyboard".to_string(),
            phonetic: "/ˈkiːbɔːd/".to_string(),
            audio_url: None,
            meanings: vec![
                RenderedMeaning {
                    part_of_speech: "noun".to_string(),
                    definitions: vec![
                        RenderedDefinition {
                            definition:
                                "A set of keys used to operate a typewriter, computer, etc."
                                    .to_string(),
                            example: None,
                        },
                        RenderedDefinition {
                            definition: "A component of many instruments including the piano, \
                                         organ, and harpsichord consisting of usually black and \
                                         white keys that cause different tones to be produced \
                                         when struck."
                                .to_string(),
                            example: None,
                        },
                        RenderedDefinition {
                            definition: "A device with keys or a set of buttons used to lock or \
                                         unlock something from the keyboard device."
                                .to_string(),
                            example: None,
                        },
                    ],
                    synonyms: vec!["electronic keyboard".to_string()],
                },
                RenderedMeaning {
                    part_of_speech: "verb".to_string(),
                    definitions: vec![
                        RenderedDefinition {
                            definition: "To type on a computer keyboard".to_string(),
                            example: None,
                        },
                        RenderedDefinition {
                            definition: "To configure a keyboard key".to_string(),
                            example: None,
                        },
                    ],
                    synonyms: vec![],
                },
            ],
            source: SourceLink {
                label: "https://en.wiktionary.org/wiki/keyboard".to_string(),
                href: Some("https://en.wiktionary.org/wiki/keyboard".to_string()),
            },
        }
    }
}

/// The four mutually exclusive panels. Exactly one is active at a time;
/// replacing the value is the only way to transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Default,
    Loading,
    Result(RenderedEntry),
    Error,
}

impl ViewState {
    pub fn panel(&self) -> Panel {
        match self {
            ViewState::Default => Panel::Default,
            ViewState::Loading => Panel::Loading,
            ViewState::Result(_) => Panel::Result,
            ViewState::Error => Panel::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Default,
    Loading,
    Result,
    Error,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Panel::Default => "default",
            Panel::Loading => "loading",
            Panel::Result => "result",
            Panel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Raw user actions produced by the presentation surface.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Search(String),
    InputCleared,
    Play,
    SetTheme(Theme),
    ToggleTheme,
    SetFont(Font),
    Close,
}

/// Events flowing between the UI task and the app event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Ui(UiEvent),
    /// Completion of a spawned lookup task. `generation` identifies the
    /// search that issued it; stale generations are discarded.
    LookupFinished {
        generation: u64,
        result: Result<LookupEntry, NotFound>,
    },
    /// App -> UI: repaint with this state.
    ViewChanged(ViewState),
    /// App -> UI: presentation preferences changed.
    PrefsChanged { theme: Theme, font: Font },
}
