use clap::Parser;
use lispy::{Engine, EngineOptions, render, render_error};
use lispy_core::{evaluator, parser::DEFAULT_MAX_DEPTH, reader};
use miette::{IntoDiagnostic, Result};
use reedline::{
    EditCommand, Emacs, FileBackedHistory, KeyCode, KeyModifiers, Keybindings, Reedline,
    ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, warn};

mod highlighter;
mod lexer;
mod prompt;
mod validator;

const HISTORY_SIZE: usize = 1000;

/// Lispy - prefix integer arithmetic, one line at a time
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(about = "Evaluate Lispy expressions", long_about = None)]
struct Args {
    /// Print the parse tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print the value tree before evaluation (for debugging)
    #[arg(long)]
    debug_read: bool,

    /// Maximum parenthesis nesting accepted on a line
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Keep the REPL history in memory only
    #[arg(long)]
    no_history: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("lispy").join("history.txt"))
}

fn file_history() -> Option<FileBackedHistory> {
    let path = history_path()?;
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(path = %parent.display(), error = %e, "cannot create history directory");
            return None;
        }
    }
    match FileBackedHistory::with_file(HISTORY_SIZE, path) {
        Ok(history) => Some(history),
        Err(e) => {
            warn!(error = %e, "falling back to in-memory history");
            None
        }
    }
}

fn setup_reedline(persist_history: bool) -> Reedline {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_validator(Box::new(validator::ParenValidator))
        .with_edit_mode(edit_mode);

    if !persist_history {
        return line_editor;
    }
    match file_history() {
        Some(history) => line_editor.with_history(Box::new(history)),
        None => line_editor,
    }
}

fn interpret_input(engine: &Engine, input: &str, args: &Args) {
    if input.trim().is_empty() {
        return;
    }
    debug!(input, "interpreting line");

    // Parse
    let tree = match engine.parse(input) {
        Ok(tree) => tree,
        Err(e) => {
            render_error(&e);
            return;
        }
    };

    if args.debug_parse {
        println!("=== Parse Tree ===");
        println!("{:#?}", tree);
        println!();
    }

    // Read
    let value = reader::read(&tree);

    if args.debug_read {
        println!("=== Read Value ===");
        println!("{}", render(&value));
        println!();
    }

    // Evaluate
    let result = evaluator::eval(value);
    println!("{}", render(&result));
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(EngineOptions {
        max_depth: args.max_depth,
    });

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&engine, expr, &args);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let mut line_editor = setup_reedline(!args.no_history);
        let prompt = prompt::LispyPrompt;

        println!("Lispy Version 0.0.0.0.1");
        println!("Press Ctrl+c to Exit\n");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&engine, buffer.as_ref(), &args);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let input = BufReader::new(stdin.lock());

        for line in input.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            interpret_input(&engine, &line, &args);
        }
    }

    Ok(())
}
