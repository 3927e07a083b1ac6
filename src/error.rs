use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("route start point is not set")]
    MissingStart,
    #[error("route end point is not set")]
    MissingEnd,
    #[error("unknown travel mode: {0}")]
    UnknownMode(String),
    #[error("route computation failed, please retry")]
    ComputationFailed,
}
