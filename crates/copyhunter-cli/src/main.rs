use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use copyhunter_core::{
    compare_detailed, load_options, read_tokens, write_report, CompareOptions, ConfigError, FallbackPick,
    OutputFormat, ReportMode, Token, TokenError,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "copyhunter", version, about = "token 序列相似度检测")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 比较两个 token 文件
    Compare {
        /// 序列 A（整数，空白或逗号分隔）
        a: PathBuf,

        /// 序列 B
        b: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// 运行内置示例
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// 配置文件路径（TOML，[compare] 表）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 输出格式
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// 未达显著性时也输出原始统计值
    #[arg(long)]
    raw: bool,

    /// 回退扫描保留一致率最高的窗口
    #[arg(long)]
    best_ratio: bool,

    /// 列出每个已确认的精确匹配
    #[arg(long)]
    matches: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

/// 输入或配置不合法时的退出码
const EXIT_BAD_INPUT: u8 = 2;

fn main() -> ExitCode {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            if is_bad_input(&err) { ExitCode::from(EXIT_BAD_INPUT) } else { ExitCode::FAILURE }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (a, b, output) = match cli.command {
        Commands::Compare { a: path_a, b: path_b, output } => {
            let a = read_tokens(&path_a).context("load sequence A")?;
            let b = read_tokens(&path_b).context("load sequence B")?;
            (a, b, output)
        }
        Commands::Demo { output } => {
            let (a, b) = demo_pair();
            (a, b, output)
        }
    };

    let opts = build_options(&output)?;
    info!(len_a = a.len(), len_b = b.len(), "starting comparison");
    let report = compare_detailed(&a, &b, &opts);

    let format = match output.format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, format, output.matches).context("write report")?;
    out.flush().ok();

    info!(significant = report.result.significant, exact_total = report.result.exact_total, "comparison finished");
    Ok(())
}

/// 组装比较参数：配置文件打底，命令行开关覆盖
fn build_options(args: &OutputArgs) -> Result<CompareOptions> {
    let mut opts = match &args.config {
        Some(path) => load_options(path).context("load config")?,
        None => CompareOptions::default(),
    };
    if args.raw {
        opts.report_mode = ReportMode::Raw;
    }
    if args.best_ratio {
        opts.fallback_pick = FallbackPick::BestRatio;
    }
    Ok(opts)
}

/// 内置示例：A 为 10..=29，B 在前部插入干扰 token 并打断公共段
fn demo_pair() -> (Vec<Token>, Vec<Token>) {
    let a: Vec<Token> = (10..=29).collect();
    let b: Vec<Token> = vec![0, 1, 10, 11, 12, 13, 50, 51, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26];
    (a, b)
}

fn is_bad_input(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(cause.downcast_ref::<TokenError>(), Some(TokenError::Malformed { .. }))
            || matches!(cause.downcast_ref::<ConfigError>(), Some(ConfigError::Parse { .. } | ConfigError::Invalid(_)))
    })
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
