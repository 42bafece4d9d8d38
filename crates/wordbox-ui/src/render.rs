use std::fmt::Write;

use colored::{ColoredString, Colorize};
use wordbox_config::Preferences;
use wordbox_types::{RenderedEntry, Theme, ViewState};

/// Paint a view state into a block of terminal text. Pure: the only
/// inputs are the state and the active preferences.
pub fn render(view: &ViewState, prefs: &Preferences) -> String {
    let mut out = String::new();

    let header = format!(
        "wordbox · theme {} · font {}",
        prefs.theme.as_str(),
        prefs.font.as_str()
    );
    let _ = writeln!(out, "{}", header.dimmed());
    let _ = writeln!(out);

    match view {
        ViewState::Default => {
            let _ = writeln!(out, "{}", "Type a word and press Enter to search.".dimmed());
            let _ = writeln!(out);
            entry_body(&RenderedEntry::fallback(), prefs.theme, &mut out);
        }
        ViewState::Loading => {
            let _ = writeln!(out, "Looking up...");
        }
        ViewState::Error => {
            let _ = writeln!(out, "{}", "No definitions found.".bold());
            let _ = writeln!(out, "Check the spelling or try another word.");
        }
        ViewState::Result(entry) => {
            entry_body(entry, prefs.theme, &mut out);
        }
    }

    out
}

fn entry_body(entry: &RenderedEntry, theme: Theme, out: &mut String) {
    let _ = write!(out, "{}", entry.word.bold());
    if entry.audio_url.is_some() {
        let _ = write!(out, "  {}", accent("[:play to hear it]", theme));
    }
    let _ = writeln!(out);

    // The phonetic line is always present, even when blank.
    let _ = writeln!(out, "{}", accent(&entry.phonetic, theme));

    for meaning in &entry.meanings {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", accent(&meaning.part_of_speech, theme).bold());
        let _ = writeln!(out, "{}", "Meaning".dimmed());
        for definition in &meaning.definitions {
            let _ = writeln!(out, "  • {}", definition.definition);
            if let Some(example) = &definition.example {
                let _ = writeln!(out, "    {}", format!("\"{example}\"").italic().dimmed());
            }
        }
        if !meaning.synonyms.is_empty() {
            let _ = writeln!(
                out,
                "{} {}",
                "Synonyms".dimmed(),
                meaning.synonyms.join(", ")
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Source".dimmed());
    match &entry.source.href {
        Some(href) => {
            let _ = writeln!(out, "{}", href.underline());
        }
        None => {
            // Non-navigating fallback link.
            let _ = writeln!(out, "{}", entry.source.label.as_str());
        }
    }
}

fn accent(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Light => text.blue(),
        Theme::Dark => text.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordbox_types::{RenderedDefinition, RenderedMeaning, SourceLink};

    fn plain() {
        colored::control::set_override(false);
    }

    fn entry(audio: Option<&str>) -> RenderedEntry {
        RenderedEntry {
            word: "hello".to_string(),
            phonetic: "/həˈloʊ/".to_string(),
            audio_url: audio.map(String::from),
            meanings: vec![RenderedMeaning {
                part_of_speech: "noun".to_string(),
                definitions: vec![RenderedDefinition {
                    definition: "A greeting.".to_string(),
                    example: Some("she was met with hellos".to_string()),
                }],
                synonyms: vec![],
            }],
            source: SourceLink {
                label: "Dictionary API".to_string(),
                href: None,
            },
        }
    }

    #[test]
    fn result_with_audio_shows_the_play_hint() {
        plain();
        let prefs = Preferences::default();
        let view = ViewState::Result(entry(Some("https://example.com/a.mp3")));
        let out = render(&view, &prefs);
        assert!(out.contains("hello"));
        assert!(out.contains("/həˈloʊ/"));
        assert!(out.contains(":play"));
        assert!(out.contains("she was met with hellos"));
    }

    #[test]
    fn result_without_audio_hides_the_play_hint() {
        plain();
        let prefs = Preferences::default();
        let out = render(&ViewState::Result(entry(None)), &prefs);
        assert!(!out.contains(":play"));
    }

    #[test]
    fn source_fallback_is_a_plain_label() {
        plain();
        let prefs = Preferences::default();
        let out = render(&ViewState::Result(entry(None)), &prefs);
        assert!(out.contains("Dictionary API"));
    }

    #[test]
    fn each_state_paints_its_own_panel() {
        plain();
        let prefs = Preferences::default();

        let default = render(&ViewState::Default, &prefs);
        assert!(default.contains("keyboard"));

        let loading = render(&ViewState::Loading, &prefs);
        assert!(loading.contains("Looking up"));
        assert!(!loading.contains("keyboard"));

        let error = render(&ViewState::Error, &prefs);
        assert!(error.contains("No definitions found"));
        assert!(!error.contains("Looking up"));
    }

    #[test]
    fn header_reflects_preferences() {
        plain();
        let prefs = Preferences {
            theme: wordbox_types::Theme::Dark,
            font: wordbox_types::Font::Serif,
        };
        let out = render(&ViewState::Loading, &prefs);
        assert!(out.contains("theme dark"));
        assert!(out.contains("font serif"));
    }
}
