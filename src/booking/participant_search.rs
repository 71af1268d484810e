use super::types::UserDto;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::http_handler::http_request::users_get::UsersRequest;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;

/// Quiet period after the last keystroke before a lookup is issued.
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounced member lookup backing the participant picker. Keystrokes go in
/// through `update_query`; only the last one within the debounce window
/// reaches the network, and matches come back on a watch channel.
pub struct ParticipantSearch {
    query_tx: mpsc::UnboundedSender<String>,
    results_rx: watch::Receiver<Vec<UserDto>>,
}

impl ParticipantSearch {
    pub fn start(client: Arc<HTTPClient>) -> Self {
        let (query_tx, mut query_rx) = mpsc::unbounded_channel::<String>();
        let (results_tx, results_rx) = watch::channel(Vec::new());
        tokio::spawn(async move {
            while let Some(received) = query_rx.recv().await {
                let mut query = received;
                loop {
                    tokio::select! {
                        newer = query_rx.recv() => match newer {
                            Some(q) => query = q,
                            None => return,
                        },
                        () = sleep(DEBOUNCE) => break,
                    }
                }
                match UsersRequest::new(&query).send_request(&client).await {
                    Ok(response) => {
                        let users = response.into_users();
                        crate::event!("Lookup {query:?} matched {} members", users.len());
                        let _ = results_tx.send(users);
                    }
                    Err(e) => crate::error!("Member lookup for {query:?} failed: {e}"),
                }
            }
        });
        Self { query_tx, results_rx }
    }

    /// Call on every keystroke of the search box.
    pub fn update_query(&self, query: &str) {
        let _ = self.query_tx.send(query.to_owned());
    }

    pub fn results(&self) -> watch::Receiver<Vec<UserDto>> {
        self.results_rx.clone()
    }
}
