//! Macros exportées : lignes de log, horloge, nom de fonction.
//!
//! `file!()` et `line!()` sont résolus au site d'appel, pas ici.

/// Affiche une erreur : `[ fichier: ligne ] [ERROR] message`.
///
/// Accepte un message seul ou une chaîne de format avec arguments, comme
/// `println!`.
#[macro_export]
macro_rules! print_error {
    () => {
        $crate::log::print_log($crate::log::Severity::Error, file!(), line!(), format_args!(""))
    };
    ($($arg:tt)+) => {
        $crate::log::print_log($crate::log::Severity::Error, file!(), line!(), format_args!($($arg)+))
    };
}

/// Affiche un message de debug : `[ fichier: ligne ] [DEBUG] message`.
#[macro_export]
macro_rules! print_debug {
    () => {
        $crate::log::print_log($crate::log::Severity::Debug, file!(), line!(), format_args!(""))
    };
    ($($arg:tt)+) => {
        $crate::log::print_log($crate::log::Severity::Debug, file!(), line!(), format_args!($($arg)+))
    };
}

/// Affiche une information : `[ fichier: ligne ] [INFO] message`.
#[macro_export]
macro_rules! print_info {
    () => {
        $crate::log::print_log($crate::log::Severity::Info, file!(), line!(), format_args!(""))
    };
    ($($arg:tt)+) => {
        $crate::log::print_log($crate::log::Severity::Info, file!(), line!(), format_args!($($arg)+))
    };
}

/// Affiche un avertissement : `[ fichier: ligne ] [WARNING] message`.
#[macro_export]
macro_rules! print_warning {
    () => {
        $crate::log::print_log($crate::log::Severity::Warning, file!(), line!(), format_args!(""))
    };
    ($($arg:tt)+) => {
        $crate::log::print_log($crate::log::Severity::Warning, file!(), line!(), format_args!($($arg)+))
    };
}

/// Affiche un message dans une couleur donnée, sans préfixe de position.
///
/// ```no_run
/// use el_wheel::ansi;
/// el_wheel::print_color!(ansi::GREEN, "ok");
/// el_wheel::print_color!(el_wheel::ansi::Color::Cyan, "{} tests", 12);
/// ```
#[macro_export]
macro_rules! print_color {
    ($color:expr, $($arg:tt)+) => {
        $crate::log::print_color($color, format_args!($($arg)+))
    };
}

/// Marqueur "passé par ici" : une ligne `[DEBUG]` sans message.
#[macro_export]
macro_rules! el_debug {
    () => {
        $crate::print_debug!()
    };
}

/// Nom court de la fonction englobante.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(idx) => &name[idx + 2..],
            None => name,
        }
    }};
}

/// Démarre l'horloge globale, avec un libellé optionnel.
#[macro_export]
macro_rules! start_clock {
    () => {
        $crate::clock::start_clock()
    };
    ($label:expr) => {
        $crate::clock::start_clock_with_label($label)
    };
}

/// Affiche le temps écoulé depuis le dernier `start_clock!`, avec la position
/// de l'appel. Retourne la durée.
#[macro_export]
macro_rules! end_clock {
    () => {
        $crate::clock::end_clock(file!(), $crate::function_name!(), line!())
    };
}

/// Comme `end_clock!`, mais silencieux si la durée est inférieure à `$min`
/// (une `std::time::Duration`).
#[macro_export]
macro_rules! end_clock_min_time {
    ($min:expr) => {
        $crate::clock::end_clock_min_time(file!(), $crate::function_name!(), line!(), $min)
    };
}

/// Émet un avertissement de compilation `TODO` au site d'appel.
///
/// Évalue à `()` à l'exécution.
#[macro_export]
macro_rules! todo_note {
    ($msg:tt) => {{
        #[deprecated(note = $msg)]
        const TODO: () = ();
        TODO
    }};
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    #[test]
    fn test_function_name() {
        assert_eq!(function_name!(), "test_function_name");
    }

    #[test]
    fn test_function_name_in_closure() {
        let name = (|| function_name!())();
        assert_eq!(name, "test_function_name_in_closure");
    }

    #[test]
    fn test_print_macros_expand() {
        print_error!("erreur {}", 1);
        print_debug!("valeur = {:?}", Some(2));
        print_info!("info");
        print_warning!("{x} restants", x = 3);
        print_color!(crate::ansi::GREEN, "ok");
        print_color!(crate::ansi::Color::Purple, "{}", "violet");
        el_debug!();
    }

    #[test]
    fn test_clock_macros_expand() {
        let _guard = crate::clock::tests_guard();
        start_clock!();
        let elapsed = end_clock!();
        assert!(elapsed < Duration::from_millis(50));

        start_clock!("étiquette");
        let elapsed = end_clock_min_time!(Duration::from_secs(60));
        assert!(elapsed < Duration::from_secs(60));
    }

    #[test]
    #[allow(deprecated)]
    fn test_todo_note_expands() {
        todo_note!("brancher la config");
    }
}
