use thiserror::Error;

/// Erreurs principales de el_wheel.
///
/// Les macros de log et l'horloge n'échouent jamais : seules les conversions
/// depuis du texte utilisateur (noms de couleurs, sévérités, choix de couleur)
/// remontent une erreur.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Couleur inconnue : {0}")]
    UnknownColor(String),

    #[error("Sévérité inconnue : {0}")]
    UnknownSeverity(String),

    #[error("Choix de couleur inconnu : {0} (attendu : auto, always, never)")]
    UnknownColorChoice(String),
}

/// Alias pratique pour Result avec Error.
pub type Result<T> = std::result::Result<T, Error>;
