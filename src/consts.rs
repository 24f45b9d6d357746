//! Constantes numériques et barrières mémoire.

use std::sync::atomic::{compiler_fence, fence, Ordering};

/// Tour complet en radians (`M_PI * 2`), valeur tronquée historique.
///
/// Diffère de [`std::f64::consts::TAU`] au-delà de la 11e décimale.
#[allow(clippy::approx_constant)]
pub const DOUBLE_M_PI: f64 = 6.28318530718;

/// Facteur de conversion radians vers degrés.
pub const RAD_TO_DEG: f64 = 57.29577951;

/// "Infini" entier : assez grand, et `INT_MAX + INT_MAX` ne déborde pas.
pub const EL_WHEEL_INT_MAX: i32 = 0x3f3f3f3f;

/// Barrière compilateur : empêche le réordonnancement des accès mémoire
/// autour de l'appel, sans instruction matérielle.
#[inline(always)]
pub fn mem_barrier() {
    compiler_fence(Ordering::SeqCst);
}

/// Barrière matérielle complète.
#[inline(always)]
pub fn full_barrier() {
    fence(Ordering::SeqCst);
}
