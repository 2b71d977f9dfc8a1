//! pasc CLI - command line driver for the pasc front end.
//! pasc CLI - pasc 前端的命令行驱动程序。

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "pasc")]
#[command(author, version, about = "pasc - Pascal front end with LOOP and WHEN statements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Parse a file and print its tree. / 解析文件并打印语法树。
    Parse {
        /// The file to parse. / 要解析的文件。
        file: String,

        /// Tree output format. / 语法树输出格式。
        #[arg(long, value_enum, default_value_t = TreeFormat::Xml)]
        format: TreeFormat,

        /// Stop after this many syntax errors. / 达到该数量的语法错误后停止。
        #[arg(long, default_value_t = 25)]
        max_errors: usize,
    },

    /// Print the token stream of a file. / 打印文件的 token 流。
    Tokens {
        /// The file to tokenize. / 要进行词法分析的文件。
        file: String,
    },
}

/// Tree output formats.
/// 语法树输出格式。
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TreeFormat {
    /// Indented XML-like listing. / 缩进的类 XML 列表。
    Xml,
    /// JSON. / JSON 格式。
    Json,
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    initialize_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            file,
            format,
            max_errors,
        } => commands::parse::run(&file, format, max_errors, cli.verbose, cli.quiet),
        Commands::Tokens { file } => commands::tokens::run(&file),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins when set.
/// 安装 tracing 订阅器，设置了 `RUST_LOG` 时以其为准。
fn initialize_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
