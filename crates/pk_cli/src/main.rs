//! Pikmin Keeper CLI
//!
//! 수집 현황 파일 관리 + 버섯 배틀 파티 계산
//! 수집 데이터는 `--file` 경로의 JSON 스냅샷 (백업 파일과 같은 형식)

mod file_store;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use file_store::JsonFileStore;
use pk_core::battle::{optimize_squad, BattleConfig, BattleModifiers, MushroomColor};
use pk_core::planner::{find_seedling, StepPlan, BOOSTER_PERCENT};
use pk_core::roster::{find_decor, CollectionFilter, CollectionQuery, CollectionSort, CollectionStats};
use pk_core::store::{backup_file_name, export_snapshot, import_snapshot, CollectionStore};
use pk_core::Collection;
use std::path::{Path, PathBuf};
use std::{env, fs};

const BATTLE_CONFIG_PATH_ENV: &str = "PK_BATTLE_CONFIG_PATH";

#[derive(Parser)]
#[command(name = "pk")]
#[command(about = "Track a pikmin collection and plan mushroom battle squads", long_about = None)]
struct Cli {
    /// Collection snapshot JSON file
    #[arg(long, global = true, default_value = "pikmin-collection.json")]
    file: PathBuf,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty collection file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Add pikmin of one type
    Add {
        /// Pikmin id (e.g. "red" or "pikmin-red")
        id: String,

        #[arg(long, default_value_t = 1)]
        count: u32,
    },

    /// Remove pikmin of one type (never below zero)
    Remove {
        id: String,

        #[arg(long, default_value_t = 1)]
        count: u32,
    },

    /// Toggle a collected decor
    Decor {
        id: String,

        /// Decor id (e.g. "restaurant", "restaurant_shiny", or an event name)
        decor: String,
    },

    /// Toggle favorite
    Favorite { id: String },

    /// Add or remove a tag
    Tag {
        id: String,

        tag: String,

        #[arg(long)]
        remove: bool,
    },

    /// List collection items
    List {
        /// Match on name or description
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        #[arg(long, value_enum, default_value_t = SortArg::Default)]
        sort: SortArg,
    },

    /// Collection statistics
    Stats,

    /// Compute the strongest squad for a mushroom battle
    Squad {
        /// Mushroom color (RED, BLUE, YELLOW, PURPLE, WHITE, PINK, GRAY, CYAN)
        #[arg(long, value_parser = parse_mushroom, default_value = "RED")]
        mushroom: MushroomColor,

        #[arg(long, default_value_t = 40)]
        squad_size: u32,

        /// Average heart level
        #[arg(long, default_value_t = 4)]
        hearts: u32,

        /// Pikmin have not bloomed
        #[arg(long)]
        no_flowers: bool,

        /// Print the JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Estimate walking steps for planted seedlings
    Plan {
        /// Seedling count, e.g. --seed red=2 --seed huge=1
        #[arg(long = "seed", value_parser = parse_seed)]
        seeds: Vec<(String, u32)>,

        /// Seedling booster active
        #[arg(long)]
        booster: bool,

        #[arg(long, default_value_t = pk_core::planner::DEFAULT_STEPS_PER_MINUTE)]
        steps_per_minute: u32,
    },

    /// Write a dated backup file
    Export {
        /// Output directory
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Replace the collection with a backup file
    Import { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Favorites,
    Incomplete,
}

impl From<FilterArg> for CollectionFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => CollectionFilter::All,
            FilterArg::Favorites => CollectionFilter::Favorites,
            FilterArg::Incomplete => CollectionFilter::Incomplete,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Default,
    CountDesc,
    CountAsc,
}

impl From<SortArg> for CollectionSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Default => CollectionSort::Default,
            SortArg::CountDesc => CollectionSort::CountDesc,
            SortArg::CountAsc => CollectionSort::CountAsc,
        }
    }
}

fn parse_mushroom(value: &str) -> std::result::Result<MushroomColor, String> {
    MushroomColor::parse(value).ok_or_else(|| format!("unknown mushroom color '{value}'"))
}

fn parse_seed(value: &str) -> std::result::Result<(String, u32), String> {
    let (id, count) = value.split_once('=').unwrap_or((value, "1"));
    let id = id.trim().to_lowercase();
    if find_seedling(&id).is_none() {
        return Err(format!("unknown seedling '{id}'"));
    }
    let count = count.trim().parse::<u32>().map_err(|e| format!("invalid count '{count}': {e}"))?;
    Ok((id, count))
}

/// "red" → "pikmin-red"
fn resolve_id(id: &str) -> String {
    let id = id.trim().to_lowercase();
    if id.starts_with("pikmin-") {
        id
    } else {
        format!("pikmin-{id}")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut store = JsonFileStore::new(&cli.file);

    match cli.command {
        Commands::Init { force } => {
            if store.path().exists() && !force {
                bail!("{} already exists (use --force to overwrite)", store.path().display());
            }
            store.save(&Collection::new())?;
            println!("✅ Created {}", store.path().display());
        }

        Commands::Add { id, count } => {
            let id = resolve_id(&id);
            let next = update(&mut store, |c| {
                let current = c.get(&id).map(|i| i.count).unwrap_or(0);
                c.set_count(&id, current.saturating_add(count))?;
                Ok(current.saturating_add(count))
            })?;
            println!("{id}: {next}");
        }

        Commands::Remove { id, count } => {
            let id = resolve_id(&id);
            let next = update(&mut store, |c| {
                let current = c.get(&id).map(|i| i.count).unwrap_or(0);
                c.set_count(&id, current.saturating_sub(count))?;
                Ok(current.saturating_sub(count))
            })?;
            println!("{id}: {next}");
        }

        Commands::Decor { id, decor } => {
            let id = resolve_id(&id);
            if find_decor(&decor).is_none() {
                log::info!("'{decor}' is not a standard decor, recording as custom/event");
            }
            let added = update(&mut store, |c| Ok(c.toggle_decor(&id, &decor)?))?;
            println!("{id}: {} {decor}", if added { "+" } else { "-" });
        }

        Commands::Favorite { id } => {
            let id = resolve_id(&id);
            let favorite = update(&mut store, |c| Ok(c.toggle_favorite(&id)?))?;
            println!("{id}: {}", if favorite { "★" } else { "☆" });
        }

        Commands::Tag { id, tag, remove } => {
            let id = resolve_id(&id);
            let changed = update(&mut store, |c| {
                Ok(if remove { c.remove_tag(&id, &tag)? } else { c.add_tag(&id, &tag)? })
            })?;
            if !changed {
                println!("{id}: no change");
            }
        }

        Commands::List { search, filter, sort } => {
            let collection = load(&store)?;
            let query = CollectionQuery { search, filter: filter.into(), sort: sort.into() };
            let items = query.apply(&collection);
            if items.is_empty() {
                println!("(no matches)");
            }
            for item in items {
                println!(
                    "{} {:<14} {:>5}  decor {:>2}  {}",
                    if item.is_favorite { "★" } else { " " },
                    item.id,
                    item.count,
                    item.collected_decors.len(),
                    item.tags.join(", ")
                );
            }
        }

        Commands::Stats => {
            let stats = CollectionStats::compute(&load(&store)?);
            println!("Total pikmin: {}", stats.total_count);
            for entry in &stats.distribution {
                println!("   {:<14} {:>5}  ({:.1}%)", entry.id, entry.count, entry.percentage);
            }
            println!(
                "Decors: {}/{} ({}%)",
                stats.decors_collected, stats.decors_possible, stats.decor_percentage
            );
        }

        Commands::Squad { mushroom, squad_size, hearts, no_flowers, json } => {
            let collection = load(&store)?;
            let config = battle_config_from_env()?;
            let modifiers =
                BattleModifiers { mushroom, squad_size, heart_level: hearts, use_flowers: !no_flowers };
            modifiers.validate()?;

            if json {
                let request = squad_request_json(&collection, &modifiers, &config)?;
                println!("{}", pk_core::calculate_squad_json(&request));
                return Ok(());
            }

            let result = optimize_squad(&collection.to_inventory(), &modifiers, &config);
            println!("🍄 {} (squad {}, hearts {})", mushroom.name(), squad_size, hearts);
            println!("   Total power: {}", result.total_power);
            for record in &result.contributions {
                println!(
                    "   {}{:<14} x{:>3} @ {:>2} = {:>4}  ({:.0}%)",
                    if record.matched_affinity { "⚡" } else { " " },
                    record.unit.id,
                    record.count_used,
                    record.score_per_unit,
                    record.contribution,
                    result.share(record)
                );
            }
            if result.unfilled_slots > 0 {
                println!("   ⚠️  {} empty slots", result.unfilled_slots);
            }
        }

        Commands::Plan { seeds, booster, steps_per_minute } => {
            let mut plan = StepPlan { booster, steps_per_minute, ..Default::default() };
            for (id, count) in seeds {
                plan.adjust(&id, count as i64)?;
            }
            let estimate = plan.estimate()?;
            println!("Seeds:   {}", estimate.total_seeds);
            println!(
                "Steps:   {}{}",
                estimate.effective_steps,
                if booster { format!(" (booster {BOOSTER_PERCENT}%)") } else { String::new() }
            );
            println!("Minutes: {}", estimate.minutes);
        }

        Commands::Export { out_dir } => {
            let collection = load(&store)?;
            let path = out_dir.join(backup_file_name(chrono::Local::now().date_naive()));
            fs::write(&path, export_snapshot(&collection)?)
                .with_context(|| format!("Failed to write backup {}", path.display()))?;
            println!("✅ Exported {}", path.display());
        }

        Commands::Import { path } => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read backup {}", path.display()))?;
            let collection = import_snapshot(&content)
                .with_context(|| format!("Invalid backup file {}", path.display()))?;
            store.save(&collection)?;
            println!("✅ Imported {} pikmin", collection.total_count());
        }
    }

    Ok(())
}

fn load(store: &JsonFileStore) -> Result<Collection> {
    store.load().with_context(|| format!("Failed to load {}", store.path().display()))
}

/// 불러오기 → 변경 → 저장
fn update<T>(
    store: &mut JsonFileStore,
    change: impl FnOnce(&mut Collection) -> Result<T>,
) -> Result<T> {
    let mut collection = load(store)?;
    let value = change(&mut collection)?;
    store
        .save(&collection)
        .with_context(|| format!("Failed to save {}", store.path().display()))?;
    Ok(value)
}

fn battle_config_from_env() -> Result<BattleConfig> {
    let Ok(path) = env::var(BATTLE_CONFIG_PATH_ENV) else {
        return Ok(BattleConfig::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(BattleConfig::default());
    }

    read_battle_config(Path::new(path))
        .with_context(|| format!("Battle config from {BATTLE_CONFIG_PATH_ENV}='{path}'"))
}

fn read_battle_config(path: &Path) -> Result<BattleConfig> {
    let content = fs::read_to_string(path).context("Failed to read battle config file")?;
    let config = BattleConfig::from_json(&content).context("Failed to parse battle config JSON")?;
    config.validate().map_err(|e| anyhow!("Invalid battle config: {e}"))?;
    Ok(config)
}

fn squad_request_json(
    collection: &Collection,
    modifiers: &BattleModifiers,
    config: &BattleConfig,
) -> Result<String> {
    let inventory: Vec<_> = collection
        .items
        .iter()
        .map(|item| {
            serde_json::json!({
                "id": item.id,
                "category": item.pikmin_type,
                "name": item.name,
                "quantity": item.count,
            })
        })
        .collect();
    let request = serde_json::json!({
        "mushroom": modifiers.mushroom,
        "squad_size": modifiers.squad_size,
        "heart_level": modifiers.heart_level,
        "use_flowers": modifiers.use_flowers,
        "inventory": inventory,
        "config": config,
    });
    Ok(serde_json::to_string(&request)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_id() {
        assert_eq!(resolve_id("red"), "pikmin-red");
        assert_eq!(resolve_id(" Winged "), "pikmin-winged");
        assert_eq!(resolve_id("pikmin-ice"), "pikmin-ice");
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("red=2").unwrap(), ("red".to_string(), 2));
        assert_eq!(parse_seed("HUGE").unwrap(), ("huge".to_string(), 1));
        assert!(parse_seed("mystery=1").is_err());
        assert!(parse_seed("red=lots").is_err());
    }

    #[test]
    fn test_parse_mushroom() {
        assert_eq!(parse_mushroom("pink").unwrap(), MushroomColor::Pink);
        assert!(parse_mushroom("green").is_err());
    }

    #[test]
    fn test_update_persists() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("c.json"));

        update(&mut store, |c| Ok(c.set_count("pikmin-red", 3)?)).unwrap();
        let unknown = update(&mut store, |c| Ok(c.set_count("pikmin-green", 1)?));

        assert!(unknown.is_err());
        assert_eq!(load(&store).unwrap().get("pikmin-red").unwrap().count, 3);
    }

    #[test]
    fn test_read_battle_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("battle.json");

        fs::write(&path, r#"{"flower_bonus": 5}"#).unwrap();
        assert_eq!(read_battle_config(&path).unwrap().flower_bonus, 5);

        fs::write(&path, r#"{"match_bonus": 100000}"#).unwrap();
        assert!(read_battle_config(&path).is_err());

        assert!(read_battle_config(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_squad_request_json_roundtrips_through_api() {
        let mut collection = Collection::new();
        collection.set_count("pikmin-red", 10).unwrap();
        collection.set_count("pikmin-yellow", 5).unwrap();
        let modifiers =
            BattleModifiers { mushroom: MushroomColor::Red, squad_size: 12, heart_level: 0, use_flowers: false };

        let request = squad_request_json(&collection, &modifiers, &BattleConfig::default()).unwrap();
        let response: serde_json::Value =
            serde_json::from_str(&pk_core::calculate_squad_json(&request)).unwrap();

        assert_eq!(response["success"], true);
        assert_eq!(response["total_power"], 148);
    }
}
