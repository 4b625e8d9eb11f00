//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `journal_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("journal_core ping={}", journal_core::ping());
    println!("journal_core version={}", journal_core::core_version());
    for (name, hex) in journal_core::theme().entries() {
        println!("theme {name}={hex}");
    }
}
