// Application layer: the interactive menu and one-shot commands built on the core.

#[cfg(feature = "cli")]
pub mod commands;
pub mod menu;
