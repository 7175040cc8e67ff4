// Shared setup for command tests

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tracing::Level;
use trainer_core::{GeneratorConfig, Pokemon, PokedexEntry, StaticPokedex, Trainer};

use crate::context::Context;
use crate::services::TrainerStorage;
use crate::services::prompt::scripted::{Answer, PromptLog, ScriptedPrompt};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn pokedex() -> StaticPokedex {
    StaticPokedex::new()
        .with_entry(
            "pikachu",
            PokedexEntry {
                abilities: strings(&["static", "lightning-rod"]),
                moves: strings(&["thunderbolt", "quick-attack", "thunder-wave", "iron-tail", "surf"]),
            },
        )
        .with_entry(
            "bulbasaur",
            PokedexEntry {
                abilities: strings(&["overgrow", "chlorophyll"]),
                moves: strings(&["tackle", "vine-whip", "razor-leaf", "sleep-powder"]),
            },
        )
        .with_entry(
            "charmander",
            PokedexEntry {
                abilities: strings(&["blaze", "solar-power"]),
                moves: strings(&["scratch", "ember", "growl"]),
            },
        )
}

pub fn pokemon(name: &str, level: u32) -> Pokemon {
    Pokemon {
        name: name.to_string(),
        level,
        ability: "static".to_string(),
        nature: "hardy".to_string(),
        moveset: strings(&["tackle"]),
    }
}

pub fn trainer_with(names: &[&str]) -> Trainer {
    let mut trainer = Trainer::new("trainer");
    for (i, name) in names.iter().enumerate() {
        trainer
            .add_pokemon(pokemon(name, 10 + i as u32))
            .expect("team has room");
    }
    trainer
}

/// Context driven by `answers`, storing files under `dir`
pub fn context_in(dir: &Path, answers: Vec<Answer>) -> (Context, Rc<RefCell<PromptLog>>) {
    let prompt = ScriptedPrompt::new(answers);
    let log = prompt.log();
    let ctx = Context::with_services(
        GeneratorConfig::default(),
        Box::new(prompt),
        Box::new(pokedex()),
        TrainerStorage::new(dir.to_path_buf()),
        StdRng::seed_from_u64(7),
    );
    (ctx, log)
}

pub fn context(answers: Vec<Answer>) -> (Context, Rc<RefCell<PromptLog>>) {
    context_in(&std::env::temp_dir(), answers)
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a debug-level subscriber and return everything it logged
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logs)
}
