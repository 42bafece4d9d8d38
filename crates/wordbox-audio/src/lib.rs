use std::io::Cursor;

use rodio::{Decoder, OutputStream, Sink};

/// Fire-and-forget pronunciation playback. Every `play` call is an
/// independent instance; nothing stops or waits for a previous clip.
/// Failures never reach the user and never touch the view state.
#[derive(Clone)]
pub struct Player {
    client: reqwest::Client,
}

impl Player {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Start playback of the clip at `url`. No-op when no clip is
    /// selected; the play control is hidden in that case, but a stray
    /// invocation must still be harmless.
    pub fn play(&self, url: Option<&str>) {
        let Some(url) = url else {
            tracing::debug!("play requested with no pronunciation selected");
            return;
        };

        let client = self.client.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            if let Err(e) = fetch_and_play(client, &url).await {
                tracing::debug!("pronunciation playback failed: {e}");
            }
        });
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_and_play(client: reqwest::Client, url: &str) -> anyhow::Result<()> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    // The output stream is not Send, so the whole decode/play lifetime
    // stays on one blocking thread.
    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let (_stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.append(Decoder::new(Cursor::new(bytes))?);
        sink.sleep_until_end();
        Ok(())
    })
    .await??;

    Ok(())
}
