use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use wordbox_audio::Player;
use wordbox_client::DictionaryClient;
use wordbox_config::Preferences;
use wordbox_types::{AppEvent, UiEvent};

use crate::input::InputController;
use crate::state::AppState;
use crate::view::ViewController;

/// App's main loop. Sole owner of the view controller: every state
/// change happens here, in event order. Lookup tasks re-enter the loop
/// through `loop_tx`.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    loop_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut view = ViewController::new();
    let mut input = InputController::new(DictionaryClient::new(), loop_tx);
    let player = Player::new();

    // Initial paint
    push_view(&app_to_ui_tx, &view).await?;

    loop {
        let event = ui_to_app_rx.recv().await?;
        match event {
            AppEvent::Ui(event) => match event {
                UiEvent::Search(query) => {
                    if input.handle_search(&mut view, &query) {
                        push_view(&app_to_ui_tx, &view).await?;
                    }
                }
                UiEvent::InputCleared => {
                    input.handle_cleared(&mut view);
                    push_view(&app_to_ui_tx, &view).await?;
                }
                UiEvent::Play => player.play(view.audio_url()),
                UiEvent::SetTheme(theme) => {
                    apply_prefs(&state, &app_to_ui_tx, |p| p.theme = theme).await?;
                }
                UiEvent::ToggleTheme => {
                    apply_prefs(&state, &app_to_ui_tx, |p| p.theme = p.theme.toggled()).await?;
                }
                UiEvent::SetFont(font) => {
                    apply_prefs(&state, &app_to_ui_tx, |p| p.font = font).await?;
                }
                UiEvent::Close => {
                    tracing::info!("close requested");
                    return Ok(());
                }
            },
            AppEvent::LookupFinished { generation, result } => {
                if input.handle_lookup_finished(&mut view, generation, result) {
                    push_view(&app_to_ui_tx, &view).await?;
                }
            }
            // App -> UI events never arrive here.
            AppEvent::ViewChanged(_) | AppEvent::PrefsChanged { .. } => {}
        }
    }
}

async fn push_view(
    app_to_ui_tx: &AsyncSender<AppEvent>,
    view: &ViewController,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ViewChanged(view.state().clone()))
        .await?;
    Ok(())
}

/// Update a preference: applies in memory first, persists best-effort,
/// then tells the UI to repaint.
async fn apply_prefs(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    update: impl FnOnce(&mut Preferences),
) -> anyhow::Result<()> {
    let snapshot = {
        let mut prefs = state.prefs.write().await;
        update(&mut prefs);
        *prefs
    };
    // Persist outside the guard; a slow disk must not stall readers.
    snapshot.save_to(&state.prefs_path);

    app_to_ui_tx
        .send(AppEvent::PrefsChanged {
            theme: snapshot.theme,
            font: snapshot.font,
        })
        .await?;
    Ok(())
}
