use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mocksmith",
    about = "Synthesize mock records and TypeScript factories from type descriptors",
    version,
    after_help = "Examples:\n  mocksmith records --schema user.schema.json --count 20 --array-length 3\n  mocksmith preview --schema user.schema.json --count 5\n  mocksmith expr --field owner --type User --local User,Order\n  mocksmith factories --interfaces interfaces.json --output src/factories.ts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize JSON records from a schema file
    Records(RecordsArgs),

    /// Show a table of sample records for a schema file
    Preview(PreviewArgs),

    /// Resolve the factory expression for a single property
    Expr(ExprArgs),

    /// Emit TypeScript factories for a list of interfaces
    Factories(FactoriesArgs),
}

#[derive(Parser, Debug)]
pub struct RecordsArgs {
    /// Path to the schema JSON file
    #[arg(long)]
    pub schema: PathBuf,

    /// Number of records to synthesize (default: 10, or [generate].count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Length of every synthesized array (default: 1, or [generate].array_length)
    #[arg(long)]
    pub array_length: Option<usize>,

    /// Use fixed placeholders instead of realistic values
    #[arg(long)]
    pub deterministic: bool,

    /// Random seed for reproducible realistic output
    #[arg(long, env = "MOCKSMITH_SEED")]
    pub seed: Option<u64>,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Path to the schema JSON file
    #[arg(long)]
    pub schema: PathBuf,

    /// Number of sample records to show
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,

    /// Length of every synthesized array
    #[arg(long)]
    pub array_length: Option<usize>,

    /// Use fixed placeholders instead of realistic values
    #[arg(long)]
    pub deterministic: bool,

    /// Random seed for reproducible realistic output
    #[arg(long, env = "MOCKSMITH_SEED")]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct ExprArgs {
    /// Property name (drives semantic inference)
    #[arg(long)]
    pub field: String,

    /// Type descriptor, e.g. string, Date, User[], Array<Order>
    #[arg(long = "type")]
    pub type_name: String,

    /// Types that have a generated factory (e.g., User,Order)
    #[arg(long, value_delimiter = ',')]
    pub local: Vec<String>,

    /// Use fixed placeholders instead of faker calls
    #[arg(long)]
    pub deterministic: bool,

    /// Suffix forming factory names (default: Factory)
    #[arg(long)]
    pub factory_suffix: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FactoriesArgs {
    /// Path to the parsed interfaces JSON file
    #[arg(long)]
    pub interfaces: PathBuf,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use fixed placeholders instead of faker calls
    #[arg(long)]
    pub deterministic: bool,

    /// Suffix forming factory names (default: Factory)
    #[arg(long)]
    pub factory_suffix: Option<String>,

    /// Module the interface types are imported from (default: ./types)
    #[arg(long)]
    pub types_module: Option<String>,

    /// Module faker is imported from (default: @faker-js/faker)
    #[arg(long)]
    pub faker_module: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expr_with_locals() {
        let cli = Cli::parse_from([
            "mocksmith", "expr", "--field", "users", "--type", "User[]", "--local", "User,Order",
        ]);
        match cli.command {
            Command::Expr(args) => {
                assert_eq!(args.type_name, "User[]");
                assert_eq!(args.local, vec!["User", "Order"]);
                assert!(!args.deterministic);
            }
            other => panic!("Expected expr, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_records_flags() {
        let cli = Cli::parse_from([
            "mocksmith",
            "records",
            "--schema",
            "s.json",
            "-n",
            "3",
            "--array-length",
            "2",
            "--deterministic",
            "--seed",
            "7",
        ]);
        match cli.command {
            Command::Records(args) => {
                assert_eq!(args.count, Some(3));
                assert_eq!(args.array_length, Some(2));
                assert!(args.deterministic);
                assert_eq!(args.seed, Some(7));
            }
            other => panic!("Expected records, got {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["mocksmith", "preview", "--schema", "s.json", "-v"]);
        assert!(cli.verbose);
    }
}
