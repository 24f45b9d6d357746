//! Mesure de temps pour le debug.
//!
//! Usage typique :
//!
//! ```no_run
//! el_wheel::start_clock!();
//! // ... travail ...
//! el_wheel::end_clock!();
//! ```
//!
//! qui affiche `[ main.rs: main: 3 ] [CLOCK] time cost: 0.012 ms`.
//!
//! L'horloge globale ne garde qu'un seul instant de départ : chaque
//! `start_clock` écrase le précédent, et `end_clock` ne le remet pas à zéro.
//! Pour des mesures imbriquées ou depuis plusieurs threads, utiliser un
//! [`Stopwatch`] par mesure.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::ansi;
use crate::config;
use crate::log::{push_location, stdout_printer, Printer};
use crate::utils::time::format_elapsed;

/// Tag des lignes de mesure.
pub const CLOCK_TAG: &str = "[CLOCK]";

/// Instant de départ d'une mesure, avec un libellé optionnel.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start: Instant,
    started_at: DateTime<Local>,
    label: Option<String>,
}

impl Stopwatch {
    /// Crée une mesure démarrée maintenant.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            started_at: Local::now(),
            label: None,
        }
    }

    /// Crée une mesure démarrée maintenant, avec un libellé.
    pub fn with_label(label: impl Into<String>) -> Self {
        let mut stopwatch = Self::new();
        stopwatch.label = Some(label.into());
        stopwatch
    }

    /// Redémarre la mesure et efface le libellé.
    pub fn start(&mut self) {
        *self = Self::new();
    }

    /// Redémarre la mesure avec un nouveau libellé.
    pub fn start_with_label(&mut self, label: impl Into<String>) {
        *self = Self::with_label(label);
    }

    /// Temps écoulé depuis le dernier départ.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Heure murale du dernier départ.
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Construit la ligne de rapport pour une durée donnée.
    pub fn report(
        &self,
        file: &str,
        function: &str,
        line: u32,
        elapsed: Duration,
        styled: bool,
    ) -> String {
        format_clock_line(file, function, line, self.label(), elapsed, styled)
    }

    /// Mesure et écrit le rapport dans `printer`.
    pub fn end_to<W: Write>(
        &self,
        printer: &mut Printer<W>,
        file: &str,
        function: &str,
        line: u32,
    ) -> io::Result<Duration> {
        let elapsed = self.elapsed();
        let styled = printer.is_styled();
        printer.write_line(&self.report(file, function, line, elapsed, styled))?;
        Ok(elapsed)
    }

    /// Mesure et affiche le rapport sur stdout. Le départ n'est pas modifié.
    pub fn end(&self, file: &str, function: &str, line: u32) -> Duration {
        let elapsed = self.elapsed();
        print_report(file, function, line, self.label(), elapsed);
        elapsed
    }

    /// Comme [`Stopwatch::end`], mais n'affiche rien si la durée est
    /// inférieure à `min`.
    pub fn end_min_time(&self, file: &str, function: &str, line: u32, min: Duration) -> Duration {
        let elapsed = self.elapsed();
        if elapsed >= min {
            print_report(file, function, line, self.label(), elapsed);
        }
        elapsed
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// `[ <fichier>: <fonction>: <ligne> ] [CLOCK] <libellé: >time cost: <ms> ms`
pub fn format_clock_line(
    file: &str,
    function: &str,
    line: u32,
    label: Option<&str>,
    elapsed: Duration,
    styled: bool,
) -> String {
    let mut buf = String::new();
    push_location(&mut buf, file, format_args!("{function}: {line}"), styled);

    if styled {
        let _ = write!(buf, "{} {CLOCK_TAG} {}", ansi::CYAN, ansi::NONE_FORMAT);
    } else {
        let _ = write!(buf, " {CLOCK_TAG} ");
    }
    if let Some(label) = label {
        let _ = write!(buf, "{label}: ");
    }
    let _ = write!(buf, "time cost: {}", format_elapsed(elapsed));

    buf
}

fn print_report(file: &str, function: &str, line: u32, label: Option<&str>, elapsed: Duration) {
    let rendered = format_clock_line(file, function, line, label, elapsed, config::stdout_styled());
    let _ = stdout_printer().write_line(&rendered);
}

/// Horloge globale du processus, créée au premier accès.
///
/// Un `end_clock` sans `start_clock` préalable mesure donc depuis ce premier
/// accès. Le mutex ne rend pas les mesures concurrentes fiables : deux
/// threads qui appellent `start_clock` s'écrasent mutuellement.
static CLOCK: LazyLock<Mutex<Stopwatch>> = LazyLock::new(|| Mutex::new(Stopwatch::new()));

fn global() -> MutexGuard<'static, Stopwatch> {
    CLOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Enregistre l'instant de départ de l'horloge globale.
pub fn start_clock() {
    global().start();
}

/// Enregistre l'instant de départ de l'horloge globale, avec un libellé.
pub fn start_clock_with_label(label: impl Into<String>) {
    global().start_with_label(label);
}

/// Affiche le temps écoulé depuis le dernier [`start_clock`].
///
/// Usage habituel : `end_clock(file!(), "ma_fonction", line!())`, ou la macro
/// `end_clock!()` qui remplit ces arguments.
pub fn end_clock(file: &str, function: &str, line: u32) -> Duration {
    // Le verrou est relâché avant l'écriture sur stdout.
    let stopwatch = global().clone();
    stopwatch.end(file, function, line)
}

/// Comme [`end_clock`], sans affichage si la durée est inférieure à `min`.
pub fn end_clock_min_time(file: &str, function: &str, line: u32, min: Duration) -> Duration {
    let stopwatch = global().clone();
    stopwatch.end_min_time(file, function, line, min)
}

/// Temps écoulé depuis le dernier [`start_clock`], sans affichage.
pub fn clock_elapsed() -> Duration {
    global().elapsed()
}

/// Sérialise les tests qui touchent l'horloge globale.
#[cfg(test)]
pub(crate) fn tests_guard() -> MutexGuard<'static, ()> {
    static GUARD: Mutex<()> = Mutex::new(());
    GUARD.lock().unwrap_or_else(PoisonError::into_inner)
}
