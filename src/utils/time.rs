//! Utilitaires pour le formatage des durées et des heures de départ.

use std::time::Duration;

use chrono::{DateTime, Local};

/// Formate une durée en millisecondes avec trois décimales ("12.345 ms").
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed_ms(elapsed))
}

/// Durée en millisecondes fractionnaires.
pub fn elapsed_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Formate une heure murale (pour l'affichage du démarrage d'une mesure).
pub fn format_wall_clock(datetime: &DateTime<Local>) -> String {
    datetime.format("%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_elapsed_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "0.000 ms");
    }

    #[test]
    fn test_format_elapsed_sub_millisecond() {
        assert_eq!(format_elapsed(Duration::from_micros(250)), "0.250 ms");
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1500.000 ms");
    }

    #[test]
    fn test_elapsed_ms() {
        assert_eq!(elapsed_ms(Duration::from_millis(42)), 42.0);
    }

    #[test]
    fn test_format_wall_clock() {
        let datetime = Local
            .with_ymd_and_hms(2018, 10, 8, 14, 5, 9)
            .single()
            .unwrap();
        assert_eq!(format_wall_clock(&datetime), "14:05:09.000");
    }
}
