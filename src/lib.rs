//! el_wheel : macros de log colorées et outils de mesure pour le debug.
//!
//! ```no_run
//! use el_wheel::{print_info, print_error, start_clock, end_clock};
//!
//! start_clock!();
//! print_info!("chargement de {} fichiers", 3);
//! print_error!("fichier introuvable");
//! end_clock!();
//! ```

pub mod ansi;
pub mod clock;
pub mod config;
pub mod consts;
pub mod error;
pub mod log;
mod macros;
pub mod utils;

pub use ansi::Color;
pub use clock::{
    clock_elapsed, end_clock, end_clock_min_time, start_clock, start_clock_with_label, Stopwatch,
};
pub use config::{color_choice, set_color_choice, ColorChoice};
pub use consts::{mem_barrier, DOUBLE_M_PI, EL_WHEEL_INT_MAX, RAD_TO_DEG};
pub use error::{Error, Result};
pub use log::{Printer, Severity};
pub use utils::path::{basename, splited_file_name};
