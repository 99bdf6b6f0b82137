use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use token_core::{Category, OutputFormat};
use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "tokendoc", author, version, about = "Design token reference tool", long_about = None)]
struct Cli {
    /// Directory holding primitives/*.json and semantic/color.json (defaults to the bundled tokens)
    #[arg(long, global = true, value_name = "DIR")]
    tokens: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a reference such as `{color.blue.600}`
    Resolve { reference: String },
    /// Print every semantic token with its resolved value
    Semantic,
    /// Print the tokens of one category
    List {
        #[arg(value_enum)]
        category: CategoryArg,
    },
    /// Render the reference pages and guides
    Build {
        /// Output directory
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Site title used in page headers
        #[arg(long)]
        title: Option<String>,
    },
    /// Report unresolved references, empty groups and untyped tokens
    Check,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum CategoryArg {
    Color,
    Typography,
    Spacing,
    BorderRadius,
    Shadow,
    Opacity,
    Semantic,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Color => Category::Color,
            CategoryArg::Typography => Category::Typography,
            CategoryArg::Spacing => Category::Spacing,
            CategoryArg::BorderRadius => Category::BorderRadius,
            CategoryArg::Shadow => Category::Shadow,
            CategoryArg::Opacity => Category::Opacity,
            CategoryArg::Semantic => Category::Semantic,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum FormatArg {
    Markdown,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

fn init_logging(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();

    let subscriber_builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => subscriber_builder.json().init(),
        LogFormat::Pretty => subscriber_builder.pretty().init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_format);

    match commands::run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "tokendoc", "build", "--out", "public", "--format", "html", "--tokens", "tokens",
        ])
        .unwrap();
        assert_eq!(cli.tokens, Some(PathBuf::from("tokens")));
        match cli.command {
            Commands::Build { out, format, title } => {
                assert_eq!(out, Some(PathBuf::from("public")));
                assert_eq!(format, Some(FormatArg::Html));
                assert!(title.is_none());
            }
            other => panic!("Expected build, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_category() {
        let cli = Cli::try_parse_from(["tokendoc", "--json", "list", "border-radius"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::List { category } => {
                assert_eq!(Category::from(category), Category::BorderRadius)
            }
            other => panic!("Expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_resolve_and_defaults() {
        let cli = Cli::try_parse_from(["tokendoc", "resolve", "{color.blue.600}"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert!(matches!(cli.command, Commands::Resolve { ref reference } if reference == "{color.blue.600}"));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["tokendoc", "list", "motion"]).is_err());
    }
}
