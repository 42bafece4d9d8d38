use wordbox_types::{
    LookupEntry, RenderedDefinition, RenderedEntry, RenderedMeaning, SourceLink, ViewState,
};

/// At most this many definitions are shown per meaning.
const MAX_DEFINITIONS: usize = 5;
/// At most this many synonyms are shown per meaning.
const MAX_SYNONYMS: usize = 5;

const SOURCE_FALLBACK_LABEL: &str = "Dictionary API";

/// Owns the single [`ViewState`]. Replacing the value is the only
/// transition mechanism, so exactly one panel is active at all times.
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            state: ViewState::Default,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn show_loading(&mut self) {
        self.transition(ViewState::Loading);
    }

    pub fn show_error(&mut self) {
        self.transition(ViewState::Error);
    }

    pub fn show_default(&mut self) {
        self.transition(ViewState::Default);
    }

    /// Shape a lookup entry for display and switch to the result panel.
    pub fn render(&mut self, entry: &LookupEntry) {
        self.transition(ViewState::Result(render_entry(entry)));
    }

    /// The clip the play action would start. Only a rendered result can
    /// carry a selection; the default view deliberately has none.
    pub fn audio_url(&self) -> Option<&str> {
        match &self.state {
            ViewState::Result(entry) => entry.audio_url.as_deref(),
            _ => None,
        }
    }

    fn transition(&mut self, next: ViewState) {
        tracing::debug!(from = %self.state.panel(), to = %next.panel(), "panel transition");
        self.state = next;
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure transform from a wire entry to its display shape. Idempotent and
/// free of side effects; all selection and truncation rules live here.
pub fn render_entry(entry: &LookupEntry) -> RenderedEntry {
    let phonetic = entry
        .phonetics
        .iter()
        .find_map(|p| p.text.as_deref().filter(|t| !t.is_empty()))
        .unwrap_or_default()
        .to_string();

    let audio_url = entry
        .phonetics
        .iter()
        .find_map(|p| p.audio.as_deref().map(str::trim).filter(|a| !a.is_empty()))
        .map(String::from);

    let meanings = entry
        .meanings
        .iter()
        .map(|meaning| RenderedMeaning {
            part_of_speech: meaning.part_of_speech.clone(),
            definitions: meaning
                .definitions
                .iter()
                .take(MAX_DEFINITIONS)
                .map(|d| RenderedDefinition {
                    definition: d.definition.clone(),
                    example: d.example.clone(),
                })
                .collect(),
            synonyms: meaning.synonyms.iter().take(MAX_SYNONYMS).cloned().collect(),
        })
        .collect();

    let source = match entry.source_urls.first() {
        Some(url) => SourceLink {
            label: url.clone(),
            href: Some(url.clone()),
        },
        None => SourceLink {
            label: SOURCE_FALLBACK_LABEL.to_string(),
            href: None,
        },
    };

    RenderedEntry {
        word: entry.word.clone(),
        phonetic,
        audio_url,
        meanings,
        source,
    }
}
