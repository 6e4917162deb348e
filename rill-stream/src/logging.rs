// Conditional logging shim: uses `tracing` when enabled, falls back to eprintln!.

#[cfg(feature = "tracing")]
macro_rules! warn_event {
    ($($arg:tt)*) => {{
        tracing::warn!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_event {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
    }};
}
