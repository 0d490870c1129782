use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use flexi_logger::Logger;
use log::info;

use sets::{AVLSet, ChainedHashSet, Set, VectorSet};
use word_checker::{WordChecker, dictionary};

#[derive(Parser)]
#[command(name = "word_checker")]
#[command(about = "Checks the spelling of words against a dictionary")]
struct Cli {
    /// Dictionary file with one word per line
    dictionary: PathBuf,

    /// Words to check. Read from standard input, one per line, if none are given.
    words: Vec<String>,

    /// Set used to hold the dictionary
    #[arg(long, value_enum, default_value_t = SetKind::Avl)]
    set: SetKind,

    /// Log specification, e.g. `info` or `sets=trace`. `RUST_LOG` takes precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SetKind {
    /// Balanced AVL tree
    Avl,
    /// AVL tree with rebalancing turned off
    Unbalanced,
    /// Hash table with separate chaining
    Hash,
    /// Unsorted vector
    Vector,
}

impl SetKind {
    fn create(self) -> Box<dyn Set<String>> {
        match self {
            SetKind::Avl => Box::new(AVLSet::<String>::new()),
            SetKind::Unbalanced => Box::new(AVLSet::<String>::unbalanced()),
            SetKind::Hash => Box::new(ChainedHashSet::<String>::new()),
            SetKind::Vector => Box::new(VectorSet::<String>::new()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)
        .with_context(|| format!("invalid log specification `{}`", cli.log_level))?
        .start()
        .context("failed to start logger")?;

    let mut words = cli.set.create();
    let added = dictionary::load_file(&cli.dictionary, &mut *words)?;
    info!("loaded {} words from {} into a {:?} set", added, cli.dictionary.display(), cli.set);

    let checker = WordChecker::new(&*words);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.words.is_empty() {
        let stdin = io::stdin();
        checker.report_lines(stdin.lock(), &mut out)
            .context("failed to check words from standard input")?;
    } else {
        for word in &cli.words {
            checker.report(word, &mut out).context("failed to write to standard output")?;
        }
    }

    Ok(())
}
