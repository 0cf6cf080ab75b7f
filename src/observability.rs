//! This module provides observability hooks for the digest pipeline.
//!
//! The `log_stage!` macro emits one structured key-value line per pipeline
//! stage through the `log` facade at `debug` level. The library never installs
//! a logger; when no logger is set (or `debug` is filtered out) the call costs a
//! level check and nothing else.

/// Logs a structured key-value line for a pipeline stage at `debug` level.
///
/// # Example
/// ```
/// use lovecrc::log_stage;
/// let words = 3;
/// log_stage!("stage" = "compress", "words" = &words);
/// ```
#[macro_export]
macro_rules! log_stage {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::__private::log::log_enabled!($crate::__private::log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__private::log::debug!("LOVECRC_STAGE: {{ {} }}", parts.join(", "));
        }
    };
}
