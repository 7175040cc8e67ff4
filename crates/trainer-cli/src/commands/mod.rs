// crates/trainer-cli/src/commands/mod.rs - Menu levels and their commands
//
// Each module here is one level of the menu tree. A level is a `Menu` that
// renders its options from the current trainer, paired with a closed enum of
// the commands it can dispatch.
//
// MODULE ORGANIZATION:
// - root: top-level "Select command" menu (print, edit, export, import, close)
// - trainer: trainer editor (name)
// - team: team editor (six slots, add pokemon, team level)
// - slot: single pokemon editor (level, ability, nature, moveset, remove)

pub mod root;
pub mod slot;
pub mod team;
pub mod trainer;

pub use root::RootMenu;

#[cfg(test)]
pub(crate) mod fixtures;
