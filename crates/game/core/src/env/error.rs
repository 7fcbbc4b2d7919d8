/// Errors raised when a required oracle slot is absent from the bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("map oracle not available")]
    MapNotAvailable,

    #[error("tables oracle not available")]
    TablesNotAvailable,
}
