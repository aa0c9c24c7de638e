use clap::{Args, Parser, Subcommand};
use exprc::{
    evaluate_source, parse_binding, substitute_source, tree_json, CliError, SubstitutionMode,
};
use log::LevelFilter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Debug, Parser)]
#[command(
    name = "exprc",
    version,
    about = "Parse, evaluate and rewrite infix arithmetic expressions",
    long_about = "exprc parses expressions built from numbers, single-letter variables,\n\
        + - * / and parentheses.\n\n\
        EXAMPLES:\n\
        \n  exprc eval '5 * (a + 4) - 8' --value 9      Evaluate with every variable = 9\n\
        \n  exprc eval 'a * b' --var a=2 --var b=3       Evaluate with named bindings\n\
        \n  exprc subst '2 * a' a '3 + 1'                Substitute a sub-expression\n\
        \n  exprc                                        Interactive substitution session"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an expression
    Eval(EvalArgs),

    /// Print an expression with minimal parentheses
    Print {
        /// Expression to normalize
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Print the parsed tree as JSON
    Tree {
        /// Expression to parse
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Substitute a sub-expression for a variable
    Subst(SubstArgs),
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// Expression to evaluate
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Value for every variable without an explicit --var binding
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    value: Option<f64>,

    /// Bind a single variable, e.g. --var a=3
    #[arg(long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,
}

#[derive(Debug, Args, Clone)]
struct SubstArgs {
    /// Expression to rewrite
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Variable to replace
    variable: String,

    /// Sub-expression spliced in at every occurrence
    #[arg(allow_hyphen_values = true)]
    substitution: String,

    /// Replace every variable regardless of its name
    #[arg(long)]
    all: bool,

    /// Emit a JSON report
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn run_eval(args: &EvalArgs) -> Result<(), CliError> {
    let bindings = args
        .vars
        .iter()
        .map(|binding| parse_binding(binding))
        .collect::<Result<Vec<_>, _>>()?;
    let value = evaluate_source(&args.expression, args.value, &bindings)?;
    println!("{value}");
    Ok(())
}

fn run_subst(args: &SubstArgs) -> Result<(), CliError> {
    let mode = if args.all {
        SubstitutionMode::All
    } else {
        SubstitutionMode::ByName
    };
    let report = substitute_source(&args.expression, &args.variable, &args.substitution, mode)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::Serialize(e.to_string()))?;
        println!("{json}");
    } else {
        println!("Before: {}", report.before);
        println!("After: {}", report.after);
    }
    Ok(())
}

fn run_session() -> i32 {
    let mut rl = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize line editor: {e}");
            return 2;
        }
    };

    let mut lines = Vec::with_capacity(3);
    for prompt in [
        "Enter an expression: ",
        "Enter variable name: ",
        "Enter a sub expression: ",
    ] {
        match rl.readline(prompt) {
            Ok(line) => lines.push(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: failed to read input: {e}");
                return 2;
            }
        }
    }

    match substitute_source(&lines[0], &lines[1], &lines[2], SubstitutionMode::ByName) {
        Ok(report) => {
            println!("\nBefore: {}", report.before);
            println!("After: {}", report.after);
            0
        }
        Err(e) => {
            eprintln!("{}", e.render());
            e.exit_code()
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => return run_session(),
        Some(Command::Eval(args)) => run_eval(&args),
        Some(Command::Print { expression }) => {
            exprc::parse_labeled("expression", &expression).map(|tree| println!("{tree}"))
        }
        Some(Command::Tree { expression }) => tree_json(&expression).map(|json| println!("{json}")),
        Some(Command::Subst(args)) => run_subst(&args),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e.render());
            e.exit_code()
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
