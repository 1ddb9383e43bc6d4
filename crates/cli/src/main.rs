use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use shotdate_renamer_core::{
    app_paths, load_config, rename_folder, FileOutcome, RenameOptions, RenameOutcome, RenameReport,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shotdate-renamer-cli")]
#[command(about = "JPEG写真をEXIFの撮影日時由来のファイル名へ一括リネームします")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Rename(RenameArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    Show,
}

#[derive(Debug, Args)]
struct RenameArgs {
    #[arg(long)]
    folder: Option<String>,
    #[arg(long, default_value_t = false)]
    include_hidden: bool,
    #[arg(long, default_value_t = false)]
    apply: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rename(args) => cmd_rename(args),
        Commands::Config(config) => match config.action {
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn cmd_rename(args: RenameArgs) -> Result<()> {
    let config = load_config()?;

    let folder = args
        .folder
        .map(PathBuf::from)
        .or(config.folder_default)
        .context("対象フォルダが指定されていません。--folder か設定ファイルで指定してください。")?;

    let options = RenameOptions {
        folder,
        include_hidden: args.include_hidden || config.include_hidden_default,
        apply: args.apply,
    };

    let report = rename_folder(&options)?;

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            print_table(&report);
        }
    }

    if args.apply {
        eprintln!(
            "適用完了: リネーム {}件 / スキップ {}件",
            report.stats.renamed,
            report.stats.skipped_total()
        );
    } else {
        eprintln!("dry-runモード: 実ファイルは変更していません。適用するには --apply を指定してください。");
    }

    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let paths = app_paths()?;
    println!("設定ファイル: {}", paths.config_path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn print_table(report: &RenameReport) {
    for file in &report.outcomes {
        println!("{}", describe(file));
    }

    println!(
        "\n集計: scanned={} images={} non_image_skip={} hidden_skip={} renamed={} no_date={} invalid_date={} exists={} error={}",
        report.stats.scanned_files,
        report.stats.image_files,
        report.stats.skipped_non_image,
        report.stats.skipped_hidden,
        report.stats.renamed,
        report.stats.skipped_no_date,
        report.stats.skipped_invalid_date,
        report.stats.skipped_existing,
        report.stats.skipped_error
    );
}

fn describe(file: &FileOutcome) -> String {
    match &file.outcome {
        RenameOutcome::Renamed { target_path } => format!(
            "リネーム: {} -> {}",
            file.original_path.display(),
            target_path.display()
        ),
        RenameOutcome::SkippedNoDate => format!(
            "スキップ: {} (EXIFに撮影日時がありません)",
            file.original_path.display()
        ),
        RenameOutcome::SkippedInvalidDate { raw_date } => format!(
            "スキップ: {} (撮影日時を解釈できません: {})",
            file.original_path.display(),
            raw_date
        ),
        RenameOutcome::SkippedDestinationExists { target_path } => format!(
            "スキップ: {} ({} は既に存在します)",
            file.original_path.display(),
            target_path.display()
        ),
        RenameOutcome::SkippedError { cause } => {
            format!("エラー: {} ({})", file.original_path.display(), cause)
        }
    }
}
