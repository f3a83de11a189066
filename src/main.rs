use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use dataset_analyzer::{
    AnalyzerConfig, ChartRenderer, ImageDataset, LogChartRenderer, SvgChartRenderer, TargetCounts,
};

/// Descriptive statistics and train/test lists for image classification datasets
#[derive(Debug, Parser)]
#[command(name = "dataset_analyzer", version, about)]
struct Cli {
    /// Dataset root, one subdirectory per class
    root: PathBuf,

    /// TOML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Only count files with these extensions (comma separated)
    #[arg(long, value_delimiter = ',')]
    extensions: Option<Vec<String>>,

    /// Do not draw a progress bar while scanning
    #[arg(long)]
    no_progress: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print totals, mean/min/max and the proportion analysis
    Analyze {
        /// Image counts to bucket classes by (comma separated)
        #[arg(long, value_delimiter = ',')]
        targets: Option<Vec<usize>>,

        /// Directory receiving SVG charts
        #[arg(long)]
        chart_dir: Option<PathBuf>,
    },
    /// Create train/test/full lists
    Split {
        /// One test image per n images of a class
        #[arg(short)]
        n: Option<usize>,

        #[arg(long)]
        train: Option<PathBuf>,

        #[arg(long)]
        test: Option<PathBuf>,

        #[arg(long)]
        full: Option<PathBuf>,

        /// Log split counts and draw the train/test chart
        #[arg(long)]
        report: bool,

        /// Directory receiving SVG charts
        #[arg(long)]
        chart_dir: Option<PathBuf>,
    },
    /// Show the images of one class
    Class { name: String },
    /// List the classes holding exactly N images
    WithCount { n: usize },
    /// Print a JSON summary of the dataset
    Summary,
}

fn renderer_for(chart_dir: Option<PathBuf>) -> Box<dyn ChartRenderer> {
    match chart_dir {
        Some(dir) => Box::new(SvgChartRenderer::new(dir)),
        None => Box::new(LogChartRenderer),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = AnalyzerConfig::load_or_default(cli.config.as_deref())?;
    if cli.extensions.is_some() {
        config.scan.extensions = cli.extensions.clone();
    }
    if cli.no_progress {
        config.scan.show_progress = false;
    }
    debug!("Effective configuration: {:?}", config);

    let dataset = ImageDataset::open_with(&cli.root, config.scan.clone())
        .with_context(|| format!("Failed to open dataset {}", cli.root.display()))?;

    match cli.command {
        Command::Analyze { targets, chart_dir } => {
            let targets = targets.map(TargetCounts::from).unwrap_or(config.analysis.target_counts);
            let renderer = renderer_for(chart_dir.or(config.charts.output_dir));
            let report = dataset.statistics().analyze(targets, renderer.as_ref())?;
            print!("{}", report);
        }
        Command::Split { n, train, test, full, report, chart_dir } => {
            let mut options = config.split.output;
            options.train_list = train.or(options.train_list);
            options.test_list = test.or(options.test_list);
            options.full_list = full.or(options.full_list);
            options.report |= report;

            let renderer = renderer_for(chart_dir.or(config.charts.output_dir));
            let split = dataset.splits().create_train_test_split_with(
                n.unwrap_or(config.split.every_n),
                &options,
                Some(renderer.as_ref()),
            )?;
            for line in split.lines() {
                println!("{}", line);
            }
        }
        Command::Class { name } => {
            let record = dataset.statistics().class_info(&name)?;
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        Command::WithCount { n } => {
            for class in dataset.statistics().classes_with_n_images(n)? {
                println!("{}", class);
            }
        }
        Command::Summary => {
            let summary = dataset.statistics().summary()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
