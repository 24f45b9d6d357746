//! Utilitaires divers.

pub mod path;
pub mod time;

pub use path::{basename, splited_file_name};
pub use time::{format_elapsed, format_wall_clock};

/// Macro de profiling conditionnelle : mesure un bloc et affiche une ligne
/// `[CLOCK]` libellée `$name`.
///
/// Activer avec: cargo run --features profiling
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! time_block {
    ($name:expr, $block:expr) => {{
        let stopwatch = $crate::clock::Stopwatch::with_label($name);
        let result = $block;
        stopwatch.end(file!(), $crate::function_name!(), line!());
        result
    }};
}

/// Version no-op quand profiling est désactivé.
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! time_block {
    ($name:expr, $block:expr) => {
        $block
    };
}
