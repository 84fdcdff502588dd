use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::path::PathBuf;

use squaremat::{FillConfig, SquareMatrix};
use squaremat_cli::commands;
use squaremat_cli::config::{load_session_config, SessionConfig};
use squaremat_cli::session::{Operation, Session};

fn matrix_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .allow_hyphen_values(true)
        .value_parser(clap::value_parser!(SquareMatrix))
}

fn fill_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("min")
            .long("min")
            .help("Inclusive lower bound for random elements")
            .allow_hyphen_values(true)
            .value_parser(clap::value_parser!(i32)),
    )
    .arg(
        Arg::new("max")
            .long("max")
            .help("Exclusive upper bound for random elements")
            .allow_hyphen_values(true)
            .value_parser(clap::value_parser!(i32)),
    )
    .arg(
        Arg::new("seed")
            .long("seed")
            .help("Seed for reproducible random matrices")
            .value_parser(clap::value_parser!(u64)),
    )
}

fn binary_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(matrix_arg("a", "Left operand, e.g. \"1 2; 3 4\""))
        .arg(matrix_arg("b", "Right operand"))
}

/// Command-line overrides on top of a (possibly loaded) fill configuration.
fn apply_fill_overrides(fill: &mut FillConfig, matches: &ArgMatches) {
    if let Some(&min) = matches.get_one::<i32>("min") {
        fill.min = min;
    }
    if let Some(&max) = matches.get_one::<i32>("max") {
        fill.max = max;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        fill.seed = Some(seed);
    }
}

fn matrix<'a>(matches: &'a ArgMatches, name: &str) -> &'a SquareMatrix {
    matches
        .get_one::<SquareMatrix>(name)
        .expect("required argument is enforced by clap")
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("SQUAREMAT_LOG", "error,squaremat=info"))
        .init();

    let matches = Command::new("squaremat")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Square matrix arithmetic for 1x1 to 3x3 integer matrices")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(fill_args(
            Command::new("random")
                .about("Print a random square matrix")
                .arg(
                    Arg::new("size")
                        .short('n')
                        .long("size")
                        .help("Side length (1 to 3)")
                        .default_value("3")
                        .value_parser(clap::value_parser!(usize)),
                ),
        ))
        .subcommand(binary_command("add", "Add two matrices of the same size"))
        .subcommand(binary_command("sub", "Subtract B from A"))
        .subcommand(binary_command("mul", "Multiply A by B"))
        .subcommand(binary_command("compare", "Compare A and B by size, then by sum of elements"))
        .subcommand(
            Command::new("det")
                .about("Determinant of a matrix")
                .arg(matrix_arg("matrix", "Matrix, e.g. \"1 2; 3 4\"")),
        )
        .subcommand(
            Command::new("inverse")
                .about("Inverse of a matrix as reduced fractions")
                .arg(matrix_arg("matrix", "Matrix, e.g. \"1 2; 3 4\""))
                .arg(
                    Arg::new("truncate")
                        .long("truncate")
                        .help("Divide the adjugate by the determinant with integer truncation")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(fill_args(
            Command::new("demo")
                .about("Generate random matrices A and B and run every operation on them")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON session configuration file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("size")
                        .short('n')
                        .long("size")
                        .help("Side length of A and B (1 to 3)")
                        .value_parser(clap::value_parser!(usize)),
                ),
        ))
        .get_matches();

    let output = match matches.subcommand() {
        Some(("random", sub_m)) => {
            let mut fill = FillConfig::default();
            apply_fill_overrides(&mut fill, sub_m);
            let size = *sub_m.get_one::<usize>("size").unwrap_or(&3);
            commands::random(size, &fill)?
        }
        Some(("add", sub_m)) => commands::binary(Operation::Add, matrix(sub_m, "a"), matrix(sub_m, "b"))?,
        Some(("sub", sub_m)) => {
            commands::binary(Operation::Subtract, matrix(sub_m, "a"), matrix(sub_m, "b"))?
        }
        Some(("mul", sub_m)) => {
            commands::binary(Operation::Multiply, matrix(sub_m, "a"), matrix(sub_m, "b"))?
        }
        Some(("compare", sub_m)) => commands::compare(matrix(sub_m, "a"), matrix(sub_m, "b")),
        Some(("det", sub_m)) => commands::determinant(matrix(sub_m, "matrix"))?,
        Some(("inverse", sub_m)) => {
            commands::inverse(matrix(sub_m, "matrix"), sub_m.get_flag("truncate"))?
        }
        Some(("demo", sub_m)) => {
            let mut config = match sub_m.get_one::<PathBuf>("config") {
                Some(path) => load_session_config(path)?,
                None => SessionConfig::default(),
            };
            apply_fill_overrides(&mut config.fill, sub_m);
            if let Some(&size) = sub_m.get_one::<usize>("size") {
                config.demo_size = size;
            }
            log::debug!("demo config: {:?}", config);
            Session::new(config).run_demo()
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    print!("{}", output);
    Ok(())
}
