use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to access log file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("log file is truncated: expected {expected} bytes, found {actual}")]
    TruncatedFile { expected: u64, actual: u64 },

    #[error("log file is full: record count is at its maximum of {max}", max = u16::MAX)]
    RecordLimit,
}
