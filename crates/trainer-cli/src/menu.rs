// crates/trainer-cli/src/menu.rs - Menu loop and command dispatch
//
// Every screen of the generator is a menu: a prompt message plus a list of
// labelled commands. `run_menu` keeps asking until a command answers
// `Flow::Close`, then returns to whoever opened the menu.
//
// SCOPED CLOSE:
// Each menu level has its own command type, so the `Close` a command returns
// can only ever end the loop that dispatched it. A command that opens a
// nested menu runs that loop to completion and then reports `Continue` to its
// own level, which re-renders.
//
//   root (RootCommand) ──Pokemon──▶ team (TeamCommand) ──[n]──▶ slot (SlotCommand)
//        ▲                               ▲                          │
//        └────── Close ends root         └──── Return ends slot ────┘

use anyhow::{Result, bail};
use trainer_core::Trainer;

use crate::context::Context;

/// What the dispatching loop should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
}

/// A unit of work offered by a menu
pub trait MenuCommand {
    fn execute(&self, ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow>;
}

/// One level of the menu tree
pub trait Menu {
    type Command: MenuCommand;

    /// Prompt shown above the options
    fn message(&self) -> &str;

    /// Options for the current trainer state
    ///
    /// Rebuilt before every prompt because labels reflect the team.
    fn options(&self, trainer: &Trainer) -> Vec<(String, Self::Command)>;
}

/// Run a menu until one of its commands returns `Flow::Close`
pub fn run_menu<M: Menu>(menu: &M, ctx: &mut Context, trainer: &mut Trainer) -> Result<()> {
    loop {
        let options = menu.options(trainer);
        if options.is_empty() {
            bail!("menu '{}' has no options", menu.message());
        }

        let labels: Vec<String> = options.iter().map(|(label, _)| label.clone()).collect();
        let choice = ctx.prompt.select(menu.message(), &labels, 0)?;

        let Some((label, command)) = options.get(choice) else {
            bail!("selection {} is out of range for '{}'", choice, menu.message());
        };

        tracing::trace!(menu = menu.message(), %label, "dispatching");

        if command.execute(ctx, trainer)? == Flow::Close {
            return Ok(());
        }
    }
}
