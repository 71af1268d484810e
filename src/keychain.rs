use crate::app::AppContext;
use crate::booking::controller::ReservationController;
use crate::booking::participant_search::ParticipantSearch;
use crate::http_handler::http_client::HTTPClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The key components of the application: HTTP client, reservation
/// controller, participant search and UI state. Initialized once at startup
/// and passed around explicitly.
#[derive(Clone)]
pub struct Keychain {
    client: Arc<HTTPClient>,
    r_cont: Arc<ReservationController>,
    search: Arc<ParticipantSearch>,
    app: Arc<RwLock<AppContext>>,
}

impl Keychain {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let client = Arc::new(HTTPClient::new(base_url, token));
        let r_cont = Arc::new(ReservationController::new(Arc::clone(&client)));
        let search = Arc::new(ParticipantSearch::start(Arc::clone(&client)));
        Self {
            client,
            r_cont,
            search,
            app: Arc::new(RwLock::new(AppContext::default())),
        }
    }

    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    pub fn r_cont(&self) -> Arc<ReservationController> { Arc::clone(&self.r_cont) }

    pub fn search(&self) -> Arc<ParticipantSearch> { Arc::clone(&self.search) }

    pub fn app(&self) -> Arc<RwLock<AppContext>> { Arc::clone(&self.app) }
}
