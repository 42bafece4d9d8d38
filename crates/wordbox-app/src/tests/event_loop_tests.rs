use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use wordbox_config::Preferences;
use wordbox_types::{AppEvent, Font, Panel, Theme, UiEvent};

use crate::events::event_loop;
use crate::state::AppState;

async fn recv(rx: &kanal::AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for an event")
        .expect("channel closed")
}

#[tokio::test]
async fn event_loop_paints_persists_and_closes() {
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("preferences.json");
    let state = Arc::new(AppState::with_prefs_path(
        Preferences::default(),
        prefs_path.clone(),
    ));

    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async(8);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(8);

    let handle = tokio::spawn(event_loop(
        state.clone(),
        ui_to_app_rx,
        ui_to_app_tx.clone(),
        app_to_ui_tx,
    ));

    // Initial paint shows the default panel.
    match recv(&app_to_ui_rx).await {
        AppEvent::ViewChanged(view) => assert_eq!(view.panel(), Panel::Default),
        other => panic!("unexpected event: {other:?}"),
    }

    // Toggling the theme applies immediately and persists.
    ui_to_app_tx
        .send(AppEvent::Ui(UiEvent::ToggleTheme))
        .await
        .unwrap();
    match recv(&app_to_ui_rx).await {
        AppEvent::PrefsChanged { theme, font } => {
            assert_eq!(theme, Theme::Dark);
            assert_eq!(font, Font::SansSerif);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(Preferences::load_from(&prefs_path).theme, Theme::Dark);

    // Setting a font persists alongside the theme.
    ui_to_app_tx
        .send(AppEvent::Ui(UiEvent::SetFont(Font::Monospace)))
        .await
        .unwrap();
    match recv(&app_to_ui_rx).await {
        AppEvent::PrefsChanged { theme, font } => {
            assert_eq!(theme, Theme::Dark);
            assert_eq!(font, Font::Monospace);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    let saved = Preferences::load_from(&prefs_path);
    assert_eq!(saved.theme, Theme::Dark);
    assert_eq!(saved.font, Font::Monospace);

    // A clear repaints the default panel.
    ui_to_app_tx
        .send(AppEvent::Ui(UiEvent::InputCleared))
        .await
        .unwrap();
    match recv(&app_to_ui_rx).await {
        AppEvent::ViewChanged(view) => assert_eq!(view.panel(), Panel::Default),
        other => panic!("unexpected event: {other:?}"),
    }

    // Close ends the loop cleanly.
    ui_to_app_tx
        .send(AppEvent::Ui(UiEvent::Close))
        .await
        .unwrap();
    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("loop did not stop")
        .expect("loop panicked");
    assert!(result.is_ok());
}

#[tokio::test]
async fn play_without_a_result_does_not_change_state() {
    let dir = tempfile::tempdir().unwrap();
    let state = Arc::new(AppState::with_prefs_path(
        Preferences::default(),
        dir.path().join("preferences.json"),
    ));

    let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async(8);
    let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(8);

    let handle = tokio::spawn(event_loop(
        state,
        ui_to_app_rx,
        ui_to_app_tx.clone(),
        app_to_ui_tx,
    ));

    // Skip the initial paint.
    recv(&app_to_ui_rx).await;

    // Play with no selection: no event, no state change.
    ui_to_app_tx.send(AppEvent::Ui(UiEvent::Play)).await.unwrap();
    ui_to_app_tx
        .send(AppEvent::Ui(UiEvent::InputCleared))
        .await
        .unwrap();
    match recv(&app_to_ui_rx).await {
        AppEvent::ViewChanged(view) => assert_eq!(view.panel(), Panel::Default),
        other => panic!("unexpected event: {other:?}"),
    }

    ui_to_app_tx.send(AppEvent::Ui(UiEvent::Close)).await.unwrap();
    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("loop did not stop")
        .expect("loop panicked");
    assert!(result.is_ok());
}
