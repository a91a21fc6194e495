use snafu::Snafu;

#[derive(Snafu, Debug, PartialEq, Eq)]
pub enum SchedulerError {
    /// Recall quality label outside {{hard, medium, easy}}.
    InvalidQuality,
    /// Manual override label outside the five interval tokens.
    InvalidInterval,
}

pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;
