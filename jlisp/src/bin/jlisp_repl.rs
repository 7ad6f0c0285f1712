// JLISP Interactive REPL
// Reads a line, evaluates it, prints the result, and loops until Ctrl-C or Ctrl-D

use clap::Parser;
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use yansi::Paint;

use jlisp::config::ReplConfig;
use jlisp::input_handling::{BatchInput, InputSource};
use jlisp::{parse, render, Runtime};

const VERSION_BANNER: &str = "JLISP Version 0.0.0.0.1";

#[derive(Parser)]
#[command(name = "jlisp-repl")]
#[command(about = "JLISP interactive REPL with string, file and pipe input")]
struct Args {
    /// Input source type
    #[arg(short, long, value_enum, default_value_t = InputSource::Interactive)]
    input: InputSource,

    /// Input string (when using --input string)
    #[arg(short, long)]
    string: Option<String>,

    /// Input file path (when using --input file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prompt shown before each line
    #[arg(long)]
    prompt: Option<String>,

    /// Line history file
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the syntax tree of each line before evaluating it
    #[arg(long)]
    show_tree: bool,
}

impl Args {
    /// Load the config file if one was given; CLI flags take precedence
    fn merge_with_config(&self) -> Result<ReplConfig, jlisp::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ReplConfig::from_file(path)?,
            None => ReplConfig::default(),
        };

        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        if self.history_file.is_some() {
            config.history_file = self.history_file.clone();
        }
        if self.no_banner {
            config.show_banner = false;
        }
        if self.no_color {
            config.color = false;
        }
        if self.show_tree {
            config.show_tree = true;
        }
        Ok(config)
    }
}

fn init_logging(config: &ReplConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    let args = Args::parse();

    let config = match args.merge_with_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    if let Some(path) = &args.config {
        info!("Loaded configuration from: {}", path.display());
    }

    let selected = BatchInput::from_args(args.input, args.file.as_deref(), args.string.as_deref());
    let batch = match selected {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let runtime = Runtime::default();

    match batch {
        None => {
            if let Err(e) = run_interactive_repl(&runtime, &config) {
                eprintln!("Failed to start line editor: {}", e);
                std::process::exit(1);
            }
        }
        Some(batch) => {
            let input = match batch.read() {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            debug!(source = %input.source_name, "evaluating batch input");
            for (line_number, line) in input.expression_lines() {
                let source_name = format!("{}:{}", input.source_name, line_number);
                println!("{}", process_line(line, &source_name, &runtime, &config));
            }
        }
    }
}

fn run_interactive_repl(runtime: &Runtime, config: &ReplConfig) -> rustyline::Result<()> {
    if config.show_banner {
        println!("{}", VERSION_BANNER);
        println!("\tEnter Ctrl+c to exit\n");
    }

    let editor_config = Config::builder()
        .max_history_size(config.max_history)?
        .auto_add_history(false)
        .build();
    let mut rl = Editor::<(), DefaultHistory>::with_config(editor_config)?;

    if let Some(path) = &config.history_file {
        if let Err(e) = rl.load_history(path) {
            debug!("No history loaded from {}: {}", path.display(), e);
        }
    }

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                println!("{}", process_line(line, "<stdin>", runtime, config));
            }
            // Ctrl-C
            Err(ReadlineError::Interrupted) => break,
            // Ctrl-D
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                break;
            }
        }
    }

    if let Some(path) = &config.history_file {
        if let Err(e) = rl.save_history(path) {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}

/// Parse and evaluate one line, returning what the REPL prints for it.
/// Neither a parse failure nor an error value ends the session.
fn process_line(line: &str, source_name: &str, runtime: &Runtime, config: &ReplConfig) -> String {
    match parse(line) {
        Ok(tree) => {
            let tree_text = if config.show_tree {
                tree.to_string()
            } else {
                String::new()
            };
            let value = runtime.evaluate_line(&tree);
            let rendered = render(&value);
            if value.is_error() && config.color {
                format!("{}{}", tree_text, rendered.red())
            } else {
                format!("{}{}", tree_text, rendered)
            }
        }
        Err(e) if config.color => format!("{}: {}", source_name.bold(), e.red()),
        Err(e) => format!("{}: {}", source_name, e),
    }
}
