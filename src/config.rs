//! Configuration globale de la sortie console.
//!
//! Le choix de couleur initial vient de l'environnement :
//! `EL_WHEEL_COLOR=auto|always|never`, sinon `NO_COLOR` (non vide) force
//! `never`. Sans l'un ni l'autre, les séquences sont toujours émises.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crossterm::tty::IsTty;

use crate::error::{Error, Result};

/// Variable d'environnement lue au premier usage.
pub const COLOR_ENV: &str = "EL_WHEEL_COLOR";

/// Politique d'émission des séquences ANSI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Couleurs seulement si stdout est un terminal.
    Auto,
    /// Toujours émettre les séquences.
    #[default]
    Always,
    /// Jamais.
    Never,
}

impl ColorChoice {
    /// Résout le choix pour stdout.
    pub fn should_style(self) -> bool {
        self.should_style_for(&std::io::stdout())
    }

    /// Résout le choix pour un flux donné.
    pub fn should_style_for<T: IsTty>(self, stream: &T) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stream.is_tty(),
        }
    }

    /// Lit le choix initial depuis les variables d'environnement.
    pub fn from_env() -> Self {
        Self::from_env_values(
            std::env::var(COLOR_ENV).ok().as_deref(),
            std::env::var_os("NO_COLOR").as_deref(),
        )
    }

    fn from_env_values(color: Option<&str>, no_color: Option<&std::ffi::OsStr>) -> Self {
        if let Some(choice) = color.and_then(|v| v.parse().ok()) {
            return choice;
        }
        match no_color {
            Some(v) if !v.is_empty() => ColorChoice::Never,
            _ => ColorChoice::default(),
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            ColorChoice::Auto => 1,
            ColorChoice::Always => 2,
            ColorChoice::Never => 3,
        }
    }

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(ColorChoice::Auto),
            2 => Some(ColorChoice::Always),
            3 => Some(ColorChoice::Never),
            _ => None,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        })
    }
}

impl FromStr for ColorChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "yes" | "on" => Ok(ColorChoice::Always),
            "never" | "no" | "off" => Ok(ColorChoice::Never),
            _ => Err(Error::UnknownColorChoice(s.to_string())),
        }
    }
}

/// 0 = pas encore lu depuis l'environnement.
static COLOR_CHOICE: AtomicU8 = AtomicU8::new(0);

/// Retourne le choix de couleur actuel.
pub fn color_choice() -> ColorChoice {
    if let Some(choice) = ColorChoice::from_u8(COLOR_CHOICE.load(Ordering::Relaxed)) {
        return choice;
    }
    let choice = ColorChoice::from_env();
    // Un set_color_choice concurrent garde la priorité.
    let _ = COLOR_CHOICE.compare_exchange(0, choice.to_u8(), Ordering::Relaxed, Ordering::Relaxed);
    ColorChoice::from_u8(COLOR_CHOICE.load(Ordering::Relaxed)).unwrap_or(choice)
}

/// Remplace le choix de couleur pour tout le processus.
pub fn set_color_choice(choice: ColorChoice) {
    COLOR_CHOICE.store(choice.to_u8(), Ordering::Relaxed);
}

/// Indique si la sortie standard doit être colorée.
pub fn stdout_styled() -> bool {
    color_choice().should_style()
}
