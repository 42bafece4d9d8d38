use std::io::Write as _;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use wordbox_config::Preferences;
use wordbox_types::{AppEvent, UiEvent, ViewState};

pub mod input;
pub mod render;

/// Presentation surface: owns stdin and stdout. Parses user lines into
/// events for the app loop and repaints whenever the view or the
/// preferences change.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    prefs: Arc<RwLock<Preferences>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let reader = tokio::spawn(read_input(ui_to_app_tx.clone(), cancel.clone()));

    let mut last_view = ViewState::Default;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else { break };
                match event {
                    AppEvent::ViewChanged(view) => {
                        last_view = view;
                        paint(&last_view, &prefs).await;
                    }
                    AppEvent::PrefsChanged { theme, font } => {
                        tracing::debug!(theme = theme.as_str(), font = font.as_str(), "preferences applied");
                        paint(&last_view, &prefs).await;
                    }
                    _ => {}
                }
            }
        }
    }

    reader.abort();
    Ok(())
}

/// Read stdin line by line and forward parsed events to the app loop.
async fn read_input(ui_to_app_tx: AsyncSender<AppEvent>, cancel: CancellationToken) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if let Some(event) = input::parse_line(&line) {
                        let closing = event == UiEvent::Close;
                        if ui_to_app_tx.send(AppEvent::Ui(event)).await.is_err() {
                            break;
                        }
                        if closing {
                            break;
                        }
                    }
                }
                Ok(None) => {
                    // stdin closed: treat as quit
                    let _ = ui_to_app_tx.send(AppEvent::Ui(UiEvent::Close)).await;
                    break;
                }
                Err(e) => {
                    tracing::error!("failed to read input: {e}");
                    break;
                }
            }
        }
    }
}

async fn paint(view: &ViewState, prefs: &Arc<RwLock<Preferences>>) {
    let prefs = *prefs.read().await;
    let mut stdout = std::io::stdout();
    let _ = writeln!(stdout, "{}", render::render(view, &prefs));
    let _ = write!(stdout, "> ");
    let _ = stdout.flush();
}
