//! Extraction du nom de fichier depuis un chemin.

/// Séparateur de chemin reconnu.
pub const SEPARATOR: char = '/';

/// Retourne le nom de fichier sans le chemin.
///
/// Renvoie la sous-chaîne qui suit le dernier `/`, ou `path` tel quel s'il
/// n'en contient aucun. Un chemin qui se termine par `/` donne une chaîne
/// vide.
pub fn splited_file_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[idx + SEPARATOR.len_utf8()..],
        None => path,
    }
}

/// Alias de [`splited_file_name`].
pub fn basename(path: &str) -> &str {
    splited_file_name(path)
}
