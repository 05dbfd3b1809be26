use std::sync::Arc;

use crate::config::Config;
use crate::email::Notifier;
use crate::media::MediaStore;
use crate::store::SubmissionStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SubmissionStore>,
    pub media: Arc<dyn MediaStore>,
    pub notifier: Option<Arc<Notifier>>,
}
