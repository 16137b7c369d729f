use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bforge",
    about = "Rebuild atomistic backbones from coarse-grained trajectories",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a LAMMPS dump into a multi-model PDB trajectory
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Decode and rebuild every frame without writing output
    #[command(visible_alias = "k")]
    Check(CheckArgs),
}

/// Inputs shared by all commands.
#[derive(Args)]
pub struct InputOptions {
    /// LAMMPS text dump with scaled coordinates
    #[arg(value_name = "DUMP")]
    pub dump: PathBuf,

    /// Protein sequence file, one chain per line
    #[arg(value_name = "SEQUENCE")]
    pub sequence: PathBuf,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the parsed topology and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Residue model options.
#[derive(Args)]
#[command(next_help_heading = "Residue Model")]
pub struct ModelOptions {
    /// Trajectory uses the protein+DNA atom-type table
    #[arg(long, visible_alias = "dna-mode", requires = "dna_reference")]
    pub dna: bool,

    /// Atomistic PDB the DNA strand sequences are read from
    #[arg(long, visible_alias = "dna-pdb", value_name = "FILE")]
    pub dna_reference: Option<PathBuf>,

    /// Place chain-terminal N and C atoms with the affine estimate only
    #[arg(long)]
    pub no_terminal: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub model: ModelOptions,

    /// Output PDB file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Append to the output file instead of truncating it
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Convert only the frame at this 0-based position
    #[arg(long, value_name = "N")]
    pub frame: Option<usize>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub model: ModelOptions,
}

impl Command {
    pub fn input(&self) -> &InputOptions {
        match self {
            Command::Convert(args) => &args.input,
            Command::Check(args) => &args.input,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dna_flag_requires_reference() {
        let err = Cli::try_parse_from(["bforge", "convert", "run.dump", "seq.txt", "--dna"]);
        assert!(err.is_err());

        let cli = Cli::try_parse_from([
            "bforge",
            "convert",
            "run.dump",
            "seq.txt",
            "--dna-mode",
            "--dna-pdb",
            "ref.pdb",
        ])
        .unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert!(args.model.dna);
        assert_eq!(args.model.dna_reference, Some(PathBuf::from("ref.pdb")));
    }

    #[test]
    fn convert_options() {
        let cli = Cli::try_parse_from([
            "bforge",
            "c",
            "run.dump",
            "seq.txt",
            "-o",
            "out.pdb",
            "--append",
            "--frame",
            "3",
            "--no-terminal",
            "-q",
        ])
        .unwrap();
        assert!(cli.command.input().quiet);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.output, Some(PathBuf::from("out.pdb")));
        assert!(args.append);
        assert_eq!(args.frame, Some(3));
        assert!(args.model.no_terminal);
    }

    #[test]
    fn check_takes_no_output() {
        assert!(Cli::try_parse_from(["bforge", "check", "a", "b", "-o", "x"]).is_err());
        let cli = Cli::try_parse_from(["bforge", "check", "a", "b", "-v"]).unwrap();
        assert!(cli.command.input().verbose);
    }
}
