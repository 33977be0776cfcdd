use thiserror::Error;

use gnss::constellation::ParsingError as ConstellationParsingError;

use crate::prelude::{Epoch, NavSatelliteId};

/// Errors that may rise when populating or querying a navigation store.
/// Lookups never fail with an [Error]: a query without a qualifying
/// record simply returns `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Time bounds requested on a store that does not contain any record
    #[error("navigation store is empty")]
    EmptyStore,
    /// Stored records must describe a concrete satellite and signal
    #[error("wildcard identity {0} cannot be stored")]
    WildcardIdentity(NavSatelliteId),
    /// [crate::prelude::SvHealth::Any] only describes a search filter
    #[error("{0}: health \"Any\" cannot be stored")]
    WildcardHealth(NavSatelliteId),
    /// Validity interval is empty or reversed
    #[error("invalid validity interval [{begin}, {end})")]
    InvalidInterval { begin: Epoch, end: Epoch },
    /// Ingestion adapter failure
    #[error("data source \"{source_id}\": {reason}")]
    DataSource { source_id: String, reason: String },
}

/// Errors that may rise when building identities from their textual
/// or numerical description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    #[error("unknown carrier band \"{0}\"")]
    CarrierBand(String),
    #[error("unknown tracking code \"{0}\"")]
    TrackingCode(String),
    #[error("unknown navigation message format \"{0}\"")]
    NavType(String),
    #[error("unknown navigation message type \"{0}\"")]
    NavMessageType(String),
    #[error("unknown health status \"{0}\"")]
    Health(String),
    #[error("invalid health code {0}")]
    HealthCode(u8),
    #[error("invalid satellite \"{0}\"")]
    Satellite(String),
    #[error("invalid signal description \"{0}\"")]
    Signal(String),
    #[error("invalid navigation satellite description \"{0}\"")]
    NavSatellite(String),
    #[error("constellation parsing error")]
    Constellation(#[from] ConstellationParsingError),
}
