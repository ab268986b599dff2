use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use cpu_time::ProcessTime;
use satnode::controller::{Controller, SolverConfig};
use satnode_bin::{dimacs, hex, matrix, reference};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "satnode", about = "Cycle-accurate SAT-solver node tooling")]
struct Cli {
    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a DIMACS CNF file to the bit-packed hex format used for RTL
    /// memory initialization.
    ToHex {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = 6)]
        width: u32,
    },
    /// Pretty-print a raw hex string of packed `[u8, u1]` byte pairs.
    PrettyHex {
        hex_string: String,
        #[arg(long, default_value_t = 80)]
        line_width: usize,
    },
    /// Run the cycle-accurate core to completion on a DIMACS file.
    Solve {
        input: PathBuf,
        #[arg(long, default_value_t = 5000)]
        max_cycles: u64,
    },
    /// Solve every `*.cnf` file in a directory with both the core and a
    /// reference DPLL oracle, and report a pass/fail table.
    RunTests { dir: PathBuf },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // A missing required argument exits 1, matching the tool this CLI
        // was modeled on; every other parse error (bad flag, --help,
        // --version) keeps clap's own exit code and formatting.
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            eprint!("{e}");
            return ExitCode::from(1);
        }
        Err(e) => e.exit(),
    };

    #[cfg(feature = "logging")]
    {
        use log::LevelFilter;
        env_logger::builder()
            .filter_level(match cli.verbose {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            })
            .init();
    }
    #[cfg(not(feature = "logging"))]
    let _ = cli.verbose;

    match cli.command {
        Command::ToHex {
            input,
            output,
            width,
        } => to_hex(&input, &output, width),
        Command::PrettyHex {
            hex_string,
            line_width,
        } => {
            println!("{}", hex::format_hex_array(&hex_string, line_width));
            ExitCode::SUCCESS
        }
        Command::Solve { input, max_cycles } => solve(&input, max_cycles),
        Command::RunTests { dir } => run_tests(&dir),
    }
}

fn to_hex(input: &Path, output: &Path, width: u32) -> ExitCode {
    let cnf = match dimacs::read_file(input) {
        Ok(cnf) => cnf,
        Err(e) => {
            eprintln!("error reading {}: {e}", input.display());
            return ExitCode::FAILURE;
        }
    };
    let rows = matrix::build_matrix(&cnf);
    let text = hex::write_hex_rows(&rows, width);
    if let Err(e) = std::fs::write(output, text) {
        eprintln!("error writing {}: {e}", output.display());
        return ExitCode::FAILURE;
    }
    println!(
        "Converted {} ({} vars, {} clauses) to {}",
        input.display(),
        cnf.num_vars,
        cnf.clauses.len(),
        output.display()
    );
    ExitCode::SUCCESS
}

fn solve(input: &Path, max_cycles: u64) -> ExitCode {
    let cnf = match dimacs::read_file(input) {
        Ok(cnf) => cnf,
        Err(e) => {
            eprintln!("error reading {}: {e}", input.display());
            return ExitCode::FAILURE;
        }
    };
    let rows = matrix::build_matrix(&cnf);

    let start = ProcessTime::now();
    let mut controller = Controller::new(rows, cnf.num_vars, SolverConfig { max_cycles });
    let (state, assignment) = controller.solve();
    let elapsed = start.elapsed();

    println!("Result: {:?}", state);
    let mut vars: Vec<_> = assignment.keys().copied().collect();
    vars.sort_unstable();
    let rendered: Vec<String> = vars
        .iter()
        .map(|v| format!("x{}={}", v, assignment[v]))
        .collect();
    println!("Assignment: {}", rendered.join(", "));
    println!("Cycles: {}", controller.cycle_count());
    println!("CPU time: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    ExitCode::SUCCESS
}

fn run_tests(dir: &PathBuf) -> ExitCode {
    let mut entries: Vec<_> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "cnf"))
            .collect(),
        Err(e) => {
            eprintln!("error reading {}: {e}", dir.display());
            return ExitCode::FAILURE;
        }
    };
    entries.sort();

    println!(
        "{:<25} | {:<6} | {:<9} | {:<6} | {:<7}",
        "File", "Node", "Reference", "Status", "Cycles"
    );
    println!("{}", "-".repeat(70));

    for path in &entries {
        let cnf = match dimacs::read_file(path) {
            Ok(cnf) => cnf,
            Err(e) => {
                println!("{:<25} | error reading file: {e}", file_name(path));
                continue;
            }
        };
        let rows = matrix::build_matrix(&cnf);
        let mut controller =
            Controller::new(rows, cnf.num_vars, SolverConfig::default());
        let (node_state, assignment) = controller.solve();
        let node_result = match node_state {
            satnode::controller::State::Sat => "SAT",
            satnode::controller::State::Unsat => "UNSAT",
            _ => "TIMEOUT",
        };

        let signed_clauses: Vec<Vec<i64>> = cnf
            .clauses
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|&&l| l != 0)
                    .map(|&l| {
                        let var = (l / 2) as i64;
                        if l % 2 == 0 {
                            var
                        } else {
                            -var
                        }
                    })
                    .collect()
            })
            .collect();
        let reference_result = if reference::solve(&signed_clauses) {
            "SAT"
        } else {
            "UNSAT"
        };

        let mismatch = node_result != reference_result;
        let unsound_model =
            node_result == "SAT" && !model_satisfies(&signed_clauses, &assignment);
        let status = if mismatch || unsound_model { "FAIL" } else { "PASS" };

        println!(
            "{:<25} | {:<6} | {:<9} | {:<6} | {:<7}",
            file_name(path),
            node_result,
            reference_result,
            status,
            controller.cycle_count()
        );
    }

    ExitCode::SUCCESS
}

fn model_satisfies(
    clauses: &[Vec<i64>],
    assignment: &std::collections::HashMap<u32, bool>,
) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|&lit| {
            let var = lit.unsigned_abs() as u32;
            match assignment.get(&var) {
                Some(&val) => (lit > 0) == val,
                None => false,
            }
        })
    })
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
