//! Lignes de log colorées.
//!
//! Format d'une ligne (séquences ANSI omises) :
//!
//! ```text
//! [ main.rs: 42 ] [INFO] message
//! ```
//!
//! Le nom de fichier est en gras, le tag prend la couleur de la sévérité et le
//! message revient au format par défaut, sauf pour `[ERROR]` où le message
//! reste en rouge jusqu'à la fin de la ligne.

use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::str::FromStr;

use crate::ansi;
use crate::config;
use crate::error::{Error, Result};
use crate::utils::path::splited_file_name;

/// Sévérité d'une ligne de log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Debug,
    Info,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
    ];

    /// Tag littéral affiché dans la ligne.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Error => "[ERROR]",
            Severity::Debug => "[DEBUG]",
            Severity::Info => "[INFO]",
            Severity::Warning => "[WARNING]",
        }
    }

    /// Couleur du tag.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Error => ansi::RED,
            Severity::Debug => ansi::BLUE,
            Severity::Info => ansi::GREEN,
            Severity::Warning => ansi::YELLOW,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
        })
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Severity::Error),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

/// Écrit `[ <fichier>: <suffixe> ]`, le nom de fichier en gras si `styled`.
pub(crate) fn push_location(buf: &mut String, file: &str, suffix: fmt::Arguments<'_>, styled: bool) {
    let name = splited_file_name(file);
    let _ = if styled {
        write!(buf, "[ {}{name}{}: {suffix} ]", ansi::BOLD, ansi::NONE_FORMAT)
    } else {
        write!(buf, "[ {name}: {suffix} ]")
    };
}

/// Construit une ligne de log (sans retour à la ligne final).
pub fn format_log_line(
    severity: Severity,
    file: &str,
    line: u32,
    message: impl fmt::Display,
    styled: bool,
) -> String {
    let mut buf = String::new();
    push_location(&mut buf, file, format_args!("{line}"), styled);

    let tag = severity.tag();
    let _ = match (styled, severity) {
        (false, _) => write!(buf, " {tag} {message}"),
        (true, Severity::Error) => {
            write!(buf, "{} {tag} {message}{}", severity.color(), ansi::NONE_FORMAT)
        }
        (true, _) => write!(buf, "{} {tag} {}{message}", severity.color(), ansi::NONE_FORMAT),
    };

    buf
}

/// Construit une ligne colorée sans préfixe de position.
pub fn format_color_line(code: &str, message: impl fmt::Display, styled: bool) -> String {
    if styled {
        ansi::paint(code, message)
    } else {
        message.to_string()
    }
}

/// Écrit des lignes de log dans un flux quelconque.
pub struct Printer<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Écrit une ligne `[ fichier: ligne ] [TAG] message`.
    pub fn log(
        &mut self,
        severity: Severity,
        file: &str,
        line: u32,
        message: impl fmt::Display,
    ) -> io::Result<()> {
        let rendered = format_log_line(severity, file, line, message, self.styled);
        self.write_line(&rendered)
    }

    /// Écrit `message` dans la couleur `code`.
    pub fn color(&mut self, code: &str, message: impl fmt::Display) -> io::Result<()> {
        let rendered = format_color_line(code, message, self.styled);
        self.write_line(&rendered)
    }

    /// Écrit une ligne déjà construite.
    pub fn write_line(&mut self, rendered: &str) -> io::Result<()> {
        // Une seule écriture par ligne pour ne pas entrelacer les threads.
        let mut line = String::with_capacity(rendered.len() + 1);
        line.push_str(rendered);
        line.push('\n');
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Printer sur la sortie standard, selon le choix de couleur global.
pub fn stdout_printer() -> Printer<io::StdoutLock<'static>> {
    Printer::new(io::stdout().lock(), config::stdout_styled())
}

/// Fonction appelée par les macros `print_error!`, `print_info!`, etc.
///
/// Les erreurs d'écriture sur stdout sont ignorées.
pub fn print_log(severity: Severity, file: &str, line: u32, args: fmt::Arguments<'_>) {
    let _ = stdout_printer().log(severity, file, line, args);
}

/// Fonction appelée par `print_color!`.
pub fn print_color(code: impl AsRef<str>, args: fmt::Arguments<'_>) {
    let _ = stdout_printer().color(code.as_ref(), args);
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_plain_lines() {
        let file = "/home/edward/project/src/main.rs";
        assert_snapshot!(
            format_log_line(Severity::Error, file, 12, "boom", false),
            @"[ main.rs: 12 ] [ERROR] boom"
        );
        assert_snapshot!(
            format_log_line(Severity::Debug, file, 13, "x = 3", false),
            @"[ main.rs: 13 ] [DEBUG] x = 3"
        );
        assert_snapshot!(
            format_log_line(Severity::Info, file, 14, "ready", false),
            @"[ main.rs: 14 ] [INFO] ready"
        );
        assert_snapshot!(
            format_log_line(Severity::Warning, file, 15, "slow", false),
            @"[ main.rs: 15 ] [WARNING] slow"
        );
    }

    #[test]
    fn test_styled_info_line() {
        let line = format_log_line(Severity::Info, "src/app.rs", 7, "ready", true);
        assert_eq!(
            line,
            "[ \u{1b}[1mapp.rs\u{1b}[0m: 7 ]\u{1b}[1;32m [INFO] \u{1b}[0mready"
        );
    }

    #[test]
    fn test_styled_error_line_keeps_message_red() {
        let line = format_log_line(Severity::Error, "src/app.rs", 8, "boom", true);
        assert_eq!(
            line,
            "[ \u{1b}[1mapp.rs\u{1b}[0m: 8 ]\u{1b}[1;31m [ERROR] boom\u{1b}[0m"
        );
    }

    #[test]
    fn test_styled_lines_strip_to_plain() {
        for severity in Severity::ALL {
            let styled = format_log_line(severity, "a/b/c.rs", 99, "msg 1", true);
            let plain = format_log_line(severity, "a/b/c.rs", 99, "msg 1", false);
            assert_eq!(ansi::strip(&styled), plain);
            assert!(styled.contains(severity.color()));
        }
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Error.color(), "\u{1b}[1;31m");
        assert_eq!(Severity::Debug.color(), "\u{1b}[1;34m");
        assert_eq!(Severity::Info.color(), "\u{1b}[1;32m");
        assert_eq!(Severity::Warning.color(), ansi::BROWN);
    }

    #[test]
    fn test_color_line() {
        assert_eq!(
            format_color_line(ansi::GREEN, "ok", true),
            "\u{1b}[1;32mok\u{1b}[0m"
        );
        assert_eq!(format_color_line(ansi::GREEN, "ok", false), "ok");
    }

    #[test]
    fn test_printer_writes_lines() {
        let mut printer = Printer::new(Vec::new(), false);
        printer
            .log(Severity::Warning, "/tmp/x.rs", 3, format_args!("{} items", 2))
            .unwrap();
        printer.color(ansi::CYAN, "plain").unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "[ x.rs: 3 ] [WARNING] 2 items\nplain\n");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            format_log_line(Severity::Debug, "lib.rs", 1, "", false),
            "[ lib.rs: 1 ] [DEBUG] "
        );
    }

    #[test]
    fn test_parse_severity() {
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
        }
        assert!(matches!(
            "fatal".parse::<Severity>(),
            Err(Error::UnknownSeverity(_))
        ));
    }
}
