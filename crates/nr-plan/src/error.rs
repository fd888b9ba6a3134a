use nr_core::NrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(
        "band {band} centre frequency {center_freq_hz} Hz is outside the supported range \
         [{min_hz}, {max_hz}] Hz"
    )]
    InvalidFrequency {
        band:           usize,
        center_freq_hz: f64,
        min_hz:         f64,
        max_hz:         f64,
    },

    #[error("traffic classes {first:?} and {second:?} both use port {port}")]
    DuplicatePort {
        port:   u16,
        first:  String,
        second: String,
    },

    #[error("{what} length {got} does not match {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("scenario configuration error: {0}")]
    Config(String),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<NrError> for PlanError {
    fn from(e: NrError) -> Self {
        match e {
            NrError::Config(msg) => PlanError::Config(msg),
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
