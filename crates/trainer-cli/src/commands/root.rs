// crates/trainer-cli/src/commands/root.rs - Top-level menu
//
// The root menu is where a session starts and ends. Close here ends the
// program; every other entry either prints, opens an editor, or moves the
// whole trainer to or from a JSON file.
//
// FILE ERRORS:
// Export and Import propagate I/O and parse failures. A missing or malformed
// file ends the session with the error rather than leaving a half-imported
// trainer behind.

use anyhow::Result;
use console::style;
use tracing::info;
use trainer_core::Trainer;

use super::team::TeamMenu;
use super::trainer::TrainerMenu;
use crate::context::Context;
use crate::menu::{Flow, Menu, MenuCommand, run_menu};

pub struct RootMenu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootCommand {
    Print,
    EditTrainer,
    EditTeam,
    Export,
    Import,
    Close,
}

impl Menu for RootMenu {
    type Command = RootCommand;

    fn message(&self) -> &str {
        "Select command"
    }

    fn options(&self, _trainer: &Trainer) -> Vec<(String, RootCommand)> {
        vec![
            ("Print".to_string(), RootCommand::Print),
            ("Trainer".to_string(), RootCommand::EditTrainer),
            ("Pokemon".to_string(), RootCommand::EditTeam),
            ("Export".to_string(), RootCommand::Export),
            ("Import".to_string(), RootCommand::Import),
            ("Close".to_string(), RootCommand::Close),
        ]
    }
}

impl MenuCommand for RootCommand {
    fn execute(&self, ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow> {
        match self {
            RootCommand::Print => {
                println!("{}", render_trainer(trainer)?);
                Ok(Flow::Continue)
            }
            RootCommand::EditTrainer => {
                run_menu(&TrainerMenu, ctx, trainer)?;
                Ok(Flow::Continue)
            }
            RootCommand::EditTeam => {
                run_menu(&TeamMenu, ctx, trainer)?;
                Ok(Flow::Continue)
            }
            RootCommand::Export => export(ctx, trainer),
            RootCommand::Import => import(ctx, trainer),
            RootCommand::Close => Ok(Flow::Close),
        }
    }
}

/// Pretty JSON of the whole trainer
pub fn render_trainer(trainer: &Trainer) -> Result<String> {
    Ok(trainer.to_pretty_json()?)
}

/// Ask for a file path, falling back to the configured one
fn ask_path(ctx: &mut Context, message: &str) -> Result<String> {
    let default = ctx.config().storage.default_path.clone();
    let answer = ctx.prompt.input(message, Some(default.as_str()))?;

    if answer.trim().is_empty() {
        Ok(default)
    } else {
        Ok(answer.trim().to_string())
    }
}

fn export(ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow> {
    let path = ask_path(ctx, "Export Path")?;
    let written = ctx.storage.save(trainer, &path)?;

    info!(path = %written.display(), team = trainer.team_len(), "exported trainer");
    println!("{} {}", style("✅ Exported trainer to").green(), written.display());

    Ok(Flow::Continue)
}

fn import(ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow> {
    let path = ask_path(ctx, "Import Path")?;
    *trainer = ctx.storage.load(&path)?;

    info!(%path, name = %trainer.name, team = trainer.team_len(), "imported trainer");
    println!(
        "{} {} ({} pokemon)",
        style("📥 Imported trainer").green(),
        trainer.name,
        trainer.team_len()
    );

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{context, context_in, trainer_with};
    use crate::services::prompt::scripted::Answer;
    use tempfile::TempDir;

    #[test]
    fn test_close_ends_session() {
        let mut trainer = Trainer::new("trainer");
        let (mut ctx, log) = context(vec![Answer::Pick("Close")]);

        run_menu(&RootMenu, &mut ctx, &mut trainer).unwrap();
        assert_eq!(log.borrow().asked, vec!["Select command"]);
    }

    #[test]
    fn test_return_from_slot_lands_in_team_editor() {
        let mut trainer = trainer_with(&["pikachu"]);
        let (mut ctx, log) = context(vec![
            Answer::Pick("Pokemon"),
            Answer::Pick("[1]"),
            Answer::Pick("Return"),
            Answer::Pick("Return"),
            Answer::Pick("Close"),
        ]);

        run_menu(&RootMenu, &mut ctx, &mut trainer).unwrap();

        let log = log.borrow();
        assert_eq!(
            log.asked,
            vec![
                "Select command",
                "Select Pokemon",
                "Select action",
                "Select Pokemon",
                "Select command"
            ]
        );
        assert_eq!(log.unused, 0);
    }

    #[test]
    fn test_return_from_trainer_editor_lands_in_root() {
        let mut trainer = Trainer::new("trainer");
        let (mut ctx, log) = context(vec![
            Answer::Pick("Trainer"),
            Answer::Pick("Return"),
            Answer::Pick("Close"),
        ]);

        run_menu(&RootMenu, &mut ctx, &mut trainer).unwrap();
        assert_eq!(
            log.borrow().asked,
            vec!["Select command", "Select action", "Select command"]
        );
    }

    #[test]
    fn test_build_team_through_menus() {
        let mut trainer = Trainer::new("trainer");
        let (mut ctx, log) = context(vec![
            Answer::Pick("Pokemon"),
            Answer::Pick("[1]"),
            Answer::Text("pikachu"),
            Answer::Pick("[2]"),
            Answer::Text("Bulbasaur"),
            Answer::Pick("[1]"),
            Answer::Pick("Level"),
            Answer::Text("12"),
            Answer::Pick("Return"),
            Answer::Pick("Return"),
            Answer::Pick("Close"),
        ]);

        run_menu(&RootMenu, &mut ctx, &mut trainer).unwrap();

        assert_eq!(log.borrow().unused, 0);
        let names: Vec<_> = trainer.team().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["pikachu", "bulbasaur"]);
        assert_eq!(trainer.pokemon(0).unwrap().level, 12);
        assert_eq!(trainer.pokemon(1).unwrap().level, 50);
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut original = trainer_with(&["pikachu", "bulbasaur", "charmander"]);
        original.name = "red".to_string();

        let (mut ctx, _log) = context_in(
            temp.path(),
            vec![
                Answer::Pick("Export"),
                Answer::Text("saves/red.json"),
                Answer::Pick("Close"),
            ],
        );
        run_menu(&RootMenu, &mut ctx, &mut original).unwrap();
        assert!(temp.path().join("saves/red.json").exists());

        let mut restored = Trainer::new("trainer");
        let (mut ctx, _log) = context_in(
            temp.path(),
            vec![
                Answer::Pick("Import"),
                Answer::Text("saves/red.json"),
                Answer::Pick("Close"),
            ],
        );
        run_menu(&RootMenu, &mut ctx, &mut restored).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn test_export_uses_configured_default_path() {
        let temp = TempDir::new().unwrap();
        let mut trainer = trainer_with(&["pikachu"]);
        let (mut ctx, _log) = context_in(
            temp.path(),
            vec![Answer::Pick("Export"), Answer::Text(""), Answer::Pick("Close")],
        );

        run_menu(&RootMenu, &mut ctx, &mut trainer).unwrap();
        assert!(temp.path().join("trainer.json").exists());
    }

    #[test]
    fn test_malformed_import_ends_session() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("broken.json"), "{\"name\": 3").unwrap();

        let mut trainer = trainer_with(&["pikachu"]);
        let (mut ctx, _log) = context_in(
            temp.path(),
            vec![Answer::Pick("Import"), Answer::Text("broken.json")],
        );

        assert!(run_menu(&RootMenu, &mut ctx, &mut trainer).is_err());
        assert_eq!(trainer.team_len(), 1);
    }

    #[test]
    fn test_render_trainer() {
        let trainer = trainer_with(&["pikachu"]);
        let parsed: Trainer = serde_json::from_str(&render_trainer(&trainer).unwrap()).unwrap();
        assert_eq!(parsed, trainer);
    }
}
