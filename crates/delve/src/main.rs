//! Delve spell engine harness
//!
//! Sets up an open arena, lets one monster cast at the player or at another
//! monster, and prints what the player would have been told.

mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use dv_core::dungeon::{Level, Position, earthquake};
use dv_core::monster::{Monster, MonsterId, RaceId, race_by_name};
use dv_core::player::{PlayerClass, You};
use dv_core::spell::{MonsterSpell, SpellId, SpellOutcome, monspell_to_monster, monspell_to_player};
use dv_core::world::EngineOptions;
use dv_core::{GameRng, GameState};

use error::CliError;

/// Who the spell is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    Player,
    Monster,
}

/// Cast monster spells in a test arena
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Delve - watch monsters cast spells", long_about = None)]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Spell to cast, by id or name (e.g. 50, "fire bolt", BoltFire)
    #[arg(long = "spell")]
    spell: Option<String>,

    /// Target of the spell
    #[arg(long = "at", value_enum, default_value_t = Target::Player)]
    at: Target,

    /// Casting monster
    #[arg(short = 'c', long = "caster", default_value = "lich")]
    caster: String,

    /// Monster on the receiving end when casting at a monster
    #[arg(short = 't', long = "target", default_value = "cyberdemon")]
    target: String,

    /// Player class (e.g. Warrior, blue-mage)
    #[arg(short = 'p', long = "class", default_value = "blue-mage")]
    class: String,

    /// Player experience level
    #[arg(short = 'l', long = "level", default_value_t = 30)]
    level: i32,

    /// Dungeon depth of the arena (0 is the town)
    #[arg(short = 'd', long = "depth", default_value_t = 10)]
    depth: u16,

    /// Number of times to cast
    #[arg(short = 'n', long = "repeat", default_value_t = 1)]
    repeat: u32,

    /// The player is not trying to learn spells
    #[arg(long = "no-stance")]
    no_stance: bool,

    /// Set off an earthquake of this radius at the caster instead of casting
    #[arg(long = "quake")]
    quake: Option<i32>,

    /// Options file (OPTIONS= lines)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// List every spell id and exit
    #[arg(long = "list")]
    list: bool,
}

const PLAYER_POS: Position = Position::new(20, 12);
const CASTER_POS: Position = Position::new(25, 12);
const TARGET_POS: Position = Position::new(25, 15);

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("delve: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    if args.list {
        list_spells();
        return Ok(());
    }

    let options = match &args.config {
        Some(path) => EngineOptions::load_from_file(path)?,
        None => EngineOptions::default(),
    };
    let class: PlayerClass = args
        .class
        .parse()
        .map_err(|_| CliError::UnknownClass(args.class.clone()))?;
    let caster_race = parse_race(&args.caster)?;

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::info!(seed = rng.seed(), "arena ready");

    let mut player = You::new(class, args.level);
    player.pos = PLAYER_POS;
    player.learning = !args.no_stance;
    let mut state = GameState::with_level(player, Level::arena(args.depth), rng);
    state.options = options;

    let caster = state
        .current_level
        .add_monster(Monster::new(caster_race, CASTER_POS));

    if let Some(radius) = args.quake {
        let shook = earthquake(&mut state, CASTER_POS, radius, Some(caster));
        flush_messages(&mut state);
        println!("earthquake: {}", if shook { "the ground shakes" } else { "nothing happens" });
        print_summary(&state);
        return Ok(());
    }

    let Some(name) = &args.spell else {
        return Err(CliError::NothingToDo);
    };
    let spell = parse_spell(name)?;
    if let Some(known) = MonsterSpell::from_id(spell) {
        if !caster_race.def().can_cast(known) {
            tracing::warn!(spell = %known, caster = caster_race.def().name, "caster does not normally know this spell");
        }
    }

    let target = match args.at {
        Target::Player => None,
        Target::Monster => {
            let race = parse_race(&args.target)?;
            Some(state.current_level.add_monster(Monster::new(race, TARGET_POS)))
        }
    };

    for round in 1..=args.repeat {
        let outcome = cast(&mut state, spell, caster, target);
        flush_messages(&mut state);
        println!("[{round}] {}", describe(outcome));
        if state.player.is_dead() {
            println!("You die...");
            break;
        }
    }
    print_summary(&state);
    Ok(())
}

fn cast(state: &mut GameState, spell: SpellId, caster: MonsterId, target: Option<MonsterId>) -> SpellOutcome {
    match target {
        None => {
            let pos = state.player.pos;
            monspell_to_player(state, spell, pos, caster)
        }
        Some(target) => {
            let pos = state
                .current_level
                .monster(target)
                .map_or(TARGET_POS, |m| m.pos);
            monspell_to_monster(state, spell, pos, caster, target, false)
        }
    }
}

/// Accept a raw id, a display name or a variant name
fn parse_spell(s: &str) -> Result<SpellId, CliError> {
    if let Ok(id) = s.parse::<u8>() {
        return Ok(SpellId(id));
    }
    MonsterSpell::iter()
        .find(|spell| spell.name().eq_ignore_ascii_case(s) || spell.to_string().eq_ignore_ascii_case(s))
        .map(MonsterSpell::id)
        .ok_or_else(|| CliError::UnknownSpell(s.to_string()))
}

fn parse_race(s: &str) -> Result<RaceId, CliError> {
    race_by_name(s).ok_or_else(|| CliError::UnknownRace(s.to_string()))
}

fn describe(outcome: SpellOutcome) -> String {
    match outcome {
        SpellOutcome::Invalid => "no effect".to_string(),
        SpellOutcome::Applied { damage, learnable } => {
            let mut s = match damage {
                Some(d) => format!("applied, {d} damage"),
                None => "applied".to_string(),
            };
            if learnable {
                s.push_str(" (learnable)");
            }
            s
        }
    }
}

fn flush_messages(state: &mut GameState) {
    for msg in &state.messages {
        println!("  {msg}");
    }
    state.clear_messages();
}

fn print_summary(state: &GameState) {
    let you = &state.player;
    println!("HP {}/{}  Mana {}/{}", you.hp, you.hp_max, you.mana, you.mana_max);
    if !you.known_spells.is_empty() {
        let known: Vec<&str> = you.known_spells.iter().map(|s| s.name()).collect();
        println!("Known spells: {}", known.join(", "));
    }
    for m in &state.current_level.monsters {
        println!("  {} at {} ({}/{} hp)", m.name(), m.pos, m.hp, m.hp_max);
    }
}

fn list_spells() {
    for spell in MonsterSpell::iter() {
        let info = spell.info();
        println!("{:>3}  {:<28} level {:>2}  {}", spell.id().0, spell.name(), info.level, spell.band());
    }
}
