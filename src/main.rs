use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::process::ExitCode;

use pc_build_validator::check::CheckCommand;
use pc_build_validator::config::{CheckOptions, DetailMode, InputFormat, InputSource, OutputFormat};
use pc_build_validator::logging::init_logging;
use pc_build_validator::prompt::InteractiveCommand;
use pc_build_validator::report::{json_template, text_template};

#[derive(Parser)]
#[command(name = "pcbv")]
#[command(version)]
#[command(about = "PC Build Validator - check build kits for compatibility and budget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(long, help = "Disable colored output", global = true)]
    no_color: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Auto,
    Text,
    Json,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => InputFormat::Auto,
            FormatArg::Text => InputFormat::Text,
            FormatArg::Json => InputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Validate the build kits in an input file")]
    Check {
        #[arg(help = "Input file, or - to read standard input")]
        input: String,

        #[arg(long, value_enum, default_value = "auto", help = "Input format")]
        format: FormatArg,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Override the total budget given in the input"
        )]
        budget: Option<i64>,

        #[arg(short, long, help = "Print the detailed budget, compatibility and score tables")]
        detailed: bool,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    #[command(about = "Enter components and kits at prompts")]
    Interactive {
        #[arg(short, long, help = "Always print the detailed report without asking")]
        detailed: bool,
    },

    #[command(about = "Print a sample input file")]
    Template {
        #[arg(long, help = "Print the JSON input format instead of text")]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().trim_end());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose)?;

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }

    match cli.command {
        Commands::Check {
            input,
            format,
            budget,
            detailed,
            json,
        } => {
            let options = CheckOptions::new(InputSource::from_arg(&input))
                .with_input_format(format.into())
                .with_budget_override(budget)
                .with_output_format(if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                })
                .with_detail(if detailed {
                    DetailMode::Detailed
                } else {
                    DetailMode::SummaryOnly
                });
            CheckCommand::new(options).execute()?;
        }
        Commands::Interactive { detailed } => {
            let detail = if detailed {
                DetailMode::Detailed
            } else {
                DetailMode::Ask
            };
            InteractiveCommand::new(detail).execute()?;
        }
        Commands::Template { json } => {
            if json {
                println!("{}", json_template()?);
            } else {
                print!("{}", text_template());
            }
        }
    }

    Ok(())
}
