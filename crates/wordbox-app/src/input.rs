use kanal::AsyncSender;
use wordbox_client::DictionaryClient;
use wordbox_types::{AppEvent, LookupEntry, NotFound};

use crate::view::ViewController;

/// Dispatches user actions onto the view controller. Each search carries
/// a generation token; a clear bumps the token so a late-arriving lookup
/// response cannot displace the default view.
pub struct InputController {
    client: DictionaryClient,
    events_tx: AsyncSender<AppEvent>,
    generation: u64,
}

impl InputController {
    pub fn new(client: DictionaryClient, events_tx: AsyncSender<AppEvent>) -> Self {
        Self {
            client,
            events_tx,
            generation: 0,
        }
    }

    /// Start a lookup. Empty or whitespace-only queries are ignored.
    /// Returns true when the view changed.
    pub fn handle_search(&mut self, view: &mut ViewController, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        self.generation += 1;
        let generation = self.generation;
        view.show_loading();

        let client = self.client.clone();
        let events_tx = self.events_tx.clone();
        let word = query.to_string();
        tokio::spawn(async move {
            let result = client.lookup(&word).await;
            if events_tx
                .send(AppEvent::LookupFinished { generation, result })
                .await
                .is_err()
            {
                tracing::debug!("event loop gone, dropping lookup result");
            }
        });

        true
    }

    /// The search input was cleared: invalidate any in-flight lookup and
    /// fall back to the default view immediately.
    pub fn handle_cleared(&mut self, view: &mut ViewController) {
        self.generation += 1;
        view.show_default();
    }

    /// Apply a finished lookup, unless a newer search or a clear has
    /// since made it stale. Returns true when the view changed.
    pub fn handle_lookup_finished(
        &mut self,
        view: &mut ViewController,
        generation: u64,
        result: Result<LookupEntry, NotFound>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale lookup result"
            );
            return false;
        }

        match result {
            Ok(entry) => view.render(&entry),
            Err(NotFound) => view.show_error(),
        }
        true
    }
}
