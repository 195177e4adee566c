use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tmsim::{MachineDef, MachineError, MachineLoader, MachineManager, TraceStyle};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// A bundled machine name or the path to a machine definition file
    #[clap(short, long, required_unless_present = "list")]
    machine: Option<String>,

    /// The input written on the tape
    #[clap(short, long, default_value = "")]
    input: String,

    /// Maximum number of steps before the run is declared indeterminate
    #[clap(short, long, default_value_t = tmsim::DEFAULT_STEP_LIMIT)]
    step_limit: usize,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,

    /// Highlight the head with ANSI colors instead of plain brackets
    #[clap(long, requires = "debug")]
    highlight: bool,

    /// List the bundled machines and exit
    #[clap(short, long)]
    list: bool,
}

fn resolve_machine(name_or_path: &str) -> Result<MachineDef, MachineError> {
    let path = Path::new(name_or_path);
    if path.is_file() {
        MachineLoader::load_def(path)
    } else {
        MachineManager::get_machine_by_name(name_or_path)
    }
}

fn run(cli: &Cli) -> Result<(), MachineError> {
    if cli.list {
        for name in MachineManager::get_machine_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Clap guarantees the machine argument is present past this point.
    let name_or_path = cli.machine.as_deref().unwrap_or_default();
    let machine = resolve_machine(name_or_path)?.build();

    if cli.debug {
        let style = if cli.highlight {
            TraceStyle::Highlight
        } else {
            TraceStyle::Plain
        };
        machine.debug(&cli.input, cli.step_limit, style);
    }

    let verdict = machine.evaluate(&cli.input, cli.step_limit);
    println!("{}", verdict);

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
