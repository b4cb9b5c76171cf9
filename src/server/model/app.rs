use sea_orm::DatabaseConnection;

use crate::server::ghtorrent::GhTorrent;

#[derive(Clone)]
pub struct AppState {
    pub ghtorrent: GhTorrent,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            ghtorrent: GhTorrent::new(db),
        }
    }
}
