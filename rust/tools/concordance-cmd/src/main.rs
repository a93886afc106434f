use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use concordance::SortKind;

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "concordance-cmd")]
#[command(about = "Command-line utility for word-frequency concordances")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds a concordance.
#[derive(Args, Debug, Clone)]
struct IngestArgs {
    /// Locale identifier (BCP-47) or built-in collation name
    #[arg(long, default_value = "en")]
    locale: String,

    /// Fold words to lower case before counting
    #[arg(short, long)]
    ignore_case: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the words of one or more text files and print them in order
    Count {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Ordering of the printed entries
        #[arg(short, long, value_enum, default_value_t = SortOrder::Alphabetic)]
        sort: SortOrder,

        /// Print the entries in reverse order
        #[arg(short, long)]
        reverse: bool,

        /// Print only the first N entries
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = commands::count::OutputFormat::Text)]
        format: commands::count::OutputFormat,

        /// Append first/last entry and word totals to the text output
        #[arg(long)]
        summary: bool,

        /// Text file(s) to read (stdin if none)
        files: Vec<String>,
    },

    /// Print the frequency of the given words
    Lookup {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Text file(s) to read (can be specified multiple times)
        #[arg(short, long, required = true)]
        file: Vec<String>,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SortOrder {
    Alphabetic,
    Frequency,
}

impl From<SortOrder> for SortKind {
    fn from(value: SortOrder) -> SortKind {
        match value {
            SortOrder::Alphabetic => SortKind::Alphabetic,
            SortOrder::Frequency => SortKind::Frequency,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Count {
            ingest,
            sort,
            reverse,
            top,
            format,
            summary,
            files,
        } => {
            let options = commands::count::CountOptions {
                locale: ingest.locale,
                fold_case: ingest.ignore_case,
                sort: sort.into(),
                reverse,
                top,
                format,
                summary,
            };
            commands::count::run(&files, &options, &mut out)
        }
        Commands::Lookup {
            ingest,
            file,
            words,
        } => commands::lookup::run(&file, &words, &ingest.locale, ingest.ignore_case, &mut out),
    }
}
