//! reizoko CLI: talking-fridge pantry assistant.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use reizoko::config::ReizokoConfig;
use reizoko::dictionary::MemoryDictionary;
use reizoko::extract::Extractor;
use reizoko::pantry::{ConsumeOutcome, Pantry, UpsertOutcome};
use reizoko::paths::ReizokoPaths;

#[derive(Parser)]
#[command(name = "reizoko", version, about = "Japanese grocery utterances to pantry records")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/reizoko/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding config, pantry and dictionary, instead of the XDG dirs.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract ingredients from an utterance and print them.
    Parse {
        /// The utterance, e.g. "鶏肉2枚と玉ねぎみっつ".
        text: String,

        /// One ingredient per line instead of JSON.
        #[arg(long)]
        plain: bool,
    },

    /// Extract ingredients from an utterance and store them in the pantry.
    Add {
        text: String,
    },

    /// Show the pantry.
    List {
        /// Only items of this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Use up some of a stored item.
    Use {
        name: String,
        quantity: f64,

        /// Unit of the stored item; the first item with the name otherwise.
        #[arg(long)]
        unit: Option<String>,
    },

    /// Manage the user dictionary.
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },

    /// List the categories the classifier can assign.
    Categories,
}

#[derive(Subcommand)]
enum DictAction {
    /// Map a name to a category.
    Add { name: String, category: String },
    /// Remove a name.
    Remove { name: String },
    /// Print all entries.
    List,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let paths = match &cli.data_dir {
        Some(dir) => ReizokoPaths::rooted_at(dir),
        None => ReizokoPaths::resolve()?,
    };
    let config_file = cli.config.clone().unwrap_or_else(|| paths.config_file());
    let config = ReizokoConfig::load_or_default(&config_file)?;

    match cli.command {
        Commands::Parse { text, plain } => {
            let extractor = config.build_extractor(&paths)?;
            let result = extractor.extract(&text);
            if plain {
                for item in &result.ingredients {
                    println!("{}\t{}{}\t{}", item.name, item.quantity, item.unit, item.category);
                }
            } else {
                let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
                println!("{json}");
            }
        }

        Commands::Add { text } => {
            paths.ensure_dirs()?;
            let extractor = config.build_extractor(&paths)?;
            add(&extractor, &config, &paths, &text)?;
        }

        Commands::List { category } => {
            let pantry = Pantry::load(&config.pantry_file(&paths))?;
            let items: Vec<_> = match &category {
                Some(c) => pantry.by_category(c).collect(),
                None => pantry.items().iter().collect(),
            };
            if items.is_empty() {
                println!("Pantry is empty.");
            }
            for item in items {
                println!(
                    "[{}] {} {}{} ({})",
                    item.id, item.name, item.quantity, item.unit, item.category
                );
            }
        }

        Commands::Use {
            name,
            quantity,
            unit,
        } => {
            paths.ensure_dirs()?;
            let pantry_file = config.pantry_file(&paths);
            let mut pantry = Pantry::load(&pantry_file)?;
            match pantry.consume(&name, unit.as_deref(), quantity)? {
                ConsumeOutcome::Remaining(left) => println!("{name}: {left} left"),
                ConsumeOutcome::Removed => println!("{name}: used up"),
            }
            pantry.save(&pantry_file)?;
        }

        Commands::Dict { action } => {
            if !matches!(action, DictAction::List) {
                paths.ensure_dirs()?;
            }
            let dict_file = config.dictionary_file(&paths);
            let mut dict = MemoryDictionary::load(&dict_file)?;
            match action {
                DictAction::Add { name, category } => {
                    match dict.insert(name.clone(), category.clone()) {
                        Some(old) => println!("{name}: {old} -> {category}"),
                        None => println!("{name}: {category}"),
                    }
                    dict.save(&dict_file)?;
                }
                DictAction::Remove { name } => {
                    if dict.remove(&name).is_some() {
                        dict.save(&dict_file)?;
                        println!("Removed {name}");
                    } else {
                        println!("{name} is not in the dictionary");
                    }
                }
                DictAction::List => {
                    if dict.is_empty() {
                        println!("Dictionary is empty.");
                    }
                    for (name, category) in dict.iter() {
                        println!("{name}\t{category}");
                    }
                }
            }
        }

        Commands::Categories => {
            let extractor = config.build_extractor(&paths)?;
            for category in extractor.lexicon().categories() {
                println!("{category}");
            }
        }
    }

    Ok(())
}

fn add(extractor: &Extractor, config: &ReizokoConfig, paths: &ReizokoPaths, text: &str) -> Result<()> {
    let result = extractor.extract(text);
    if result.ingredients.is_empty() {
        println!("Nothing recognized.");
        return Ok(());
    }

    let pantry_file = config.pantry_file(paths);
    let mut pantry = Pantry::load(&pantry_file)?;
    let outcomes = pantry.upsert_all(&result.ingredients)?;
    pantry.save(&pantry_file)?;

    for (item, outcome) in result.ingredients.iter().zip(outcomes) {
        let verb = match outcome {
            UpsertOutcome::Inserted(_) => "added",
            UpsertOutcome::Merged(_) => "merged",
        };
        println!(
            "{verb}: {} {}{} ({})",
            item.name, item.quantity, item.unit, item.category
        );
    }
    for phrase in &result.debug.degraded {
        println!("note: no name recognized in \"{phrase}\"");
    }
    Ok(())
}
