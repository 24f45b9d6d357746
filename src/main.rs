use std::process::{Command, ExitStatus};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use el_wheel::ansi::{self, Color};
use el_wheel::utils::{format_elapsed, format_wall_clock};
use el_wheel::{
    el_debug, print_color, print_debug, print_error, print_info, print_warning, ColorChoice,
    Severity, Stopwatch,
};

#[derive(Parser)]
#[command(name = "el_wheel")]
#[command(about = "Lignes de log colorées et mesures de temps depuis le shell")]
#[command(version)]
struct Cli {
    /// Couleurs (défaut : $EL_WHEEL_COLOR, sinon always ; NO_COLOR force never)
    #[arg(long, value_enum, global = true)]
    color: Option<ColorChoice>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Affiche une ligne de log `[ fichier: ligne ] [TAG] message`
    Log {
        /// error, debug, info ou warning
        severity: Severity,
        /// Message (les mots sont joints par des espaces)
        #[arg(required = true)]
        message: Vec<String>,
        /// Fichier à afficher (seul le nom de fichier est gardé)
        #[arg(long)]
        file: Option<String>,
        /// Numéro de ligne à afficher
        #[arg(long)]
        line: Option<u32>,
    },
    /// Affiche un message dans une couleur (red, l_green, bold, ...)
    Color {
        #[arg(id = "palette", value_name = "COLOR")]
        color: Color,
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Affiche le nom de fichier de chaque chemin
    Basename {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Mesure la durée d'une commande
    Time {
        /// N'affiche la mesure que si elle dépasse ce seuil
        #[arg(long)]
        min_ms: Option<u64>,
        /// Libellé de la mesure (défaut : le nom du programme)
        #[arg(long)]
        label: Option<String>,
        /// Programme et arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        cmd: Vec<String>,
    },
    /// Démonstration de toutes les sorties (défaut)
    Demo {
        /// Durée de la pause mesurée
        #[arg(long, default_value = "20")]
        sleep_ms: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(choice) = cli.color {
        el_wheel::set_color_choice(choice);
    }

    match cli.command {
        Some(Commands::Log {
            severity,
            message,
            file,
            line,
        }) => {
            let file = file.as_deref().unwrap_or(file!());
            let line = line.unwrap_or(line!());
            el_wheel::log::print_log(severity, file, line, format_args!("{}", message.join(" ")));
        }
        Some(Commands::Color { color, message }) => {
            print_color!(color, "{}", message.join(" "));
        }
        Some(Commands::Basename { paths }) => {
            for path in &paths {
                println!("{}", el_wheel::basename(path));
            }
        }
        Some(Commands::Time {
            min_ms,
            label,
            cmd,
        }) => {
            let code = time_command(&cmd, label, min_ms.map(Duration::from_millis))?;
            std::process::exit(code);
        }
        Some(Commands::Demo { sleep_ms }) => run_demo(sleep_ms),
        None => run_demo(20),
    }

    Ok(())
}

/// Lance `command` entre `start_clock` et `end_clock`, retourne son code de
/// sortie.
fn time_command(command: &[String], label: Option<String>, min: Option<Duration>) -> anyhow::Result<i32> {
    let (program, args) = command
        .split_first()
        .context("aucune commande à mesurer")?;

    el_wheel::start_clock_with_label(label.unwrap_or_else(|| program.clone()));
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("impossible de lancer {program}"))?;

    match min {
        Some(min) => el_wheel::end_clock_min_time(file!(), program, line!(), min),
        None => el_wheel::end_clock(file!(), program, line!()),
    };

    Ok(exit_code(status))
}

/// Code de sortie à propager. Tué par un signal : 128 + numéro, comme le shell.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

fn run_demo(sleep_ms: u64) {
    print_color!(ansi::BOLD, "el_wheel {}", env!("CARGO_PKG_VERSION"));

    let stopwatch = Stopwatch::with_label("demo");
    println!("started at {}", format_wall_clock(&stopwatch.started_at()));

    print_error!("échec de l'ouverture de {}", "config.toml");
    print_warning!("{} tentatives restantes", 2);
    print_info!("connexion établie");
    print_debug!("payload = {:?}", [1, 2, 3]);
    el_debug!();

    for color in Color::ALL {
        print_color!(*color, "{:<13}{:?}", color.name(), color.code());
    }

    el_wheel::start_clock!("sleep");
    std::thread::sleep(Duration::from_millis(sleep_ms));
    el_wheel::end_clock!();

    let elapsed = stopwatch.end(file!(), el_wheel::function_name!(), line!());
    println!("total {}", format_elapsed(elapsed));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_color_command_with_global_flag() {
        let cli = Cli::try_parse_from(["el_wheel", "color", "--color", "never", "l_red", "x"]).unwrap();
        assert_eq!(cli.color, Some(ColorChoice::Never));
        match cli.command {
            Some(Commands::Color { color, message }) => {
                assert_eq!(color, Color::LightRed);
                assert_eq!(message, vec!["x".to_string()]);
            }
            _ => panic!("expected the color command"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_for_signal() {
        use std::os::unix::process::ExitStatusExt;

        // Statut brut de wait(2) : tué par SIGKILL.
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
        // Sortie normale avec le code 3.
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
    }
}
