#![deny(warnings)]
pub mod game;
pub mod model;

pub use game::serialization::{RoundSnapshot, SnapshotError};
pub use model::card::{Action, CardId};
pub use model::contract::{Contract, ContractName};
pub use model::player::{PlayerCount, Seat, Turn};
pub use model::round::{ActionError, RoundPhase, RoundState};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "tarok"
    }

    pub const fn codename() -> &'static str {
        "Round Engine"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "tarok");
        assert_eq!(AppInfo::codename(), "Round Engine");
        assert!(!AppInfo::version().is_empty());
    }
}
