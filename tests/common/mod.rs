//! Helpers pour les tests.

#![allow(dead_code)]

use std::process::{Command, Output};

/// Commande `el_wheel` sans influence de l'environnement de couleur.
pub fn el_wheel() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_el_wheel"));
    cmd.env_remove("EL_WHEEL_COLOR").env_remove("NO_COLOR");
    cmd
}

/// Lance `el_wheel` avec les arguments donnés.
pub fn run(args: &[&str]) -> Output {
    el_wheel()
        .args(args)
        .output()
        .expect("failed to run el_wheel binary")
}

/// Stdout de la commande, en supposant qu'elle a réussi.
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "el_wheel exited with {:?}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout is not utf-8")
}
