//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `regbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("regbook_core ping={}", regbook_core::ping());
    println!("regbook_core version={}", regbook_core::core_version());
}
