/// `tracing::debug!` when the `tracing` feature is enabled, nothing otherwise
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}
