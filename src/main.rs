use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use doku::{solver, Difficulty, Grid, PuzzleGenerator};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "doku", version, about = "Sudoku solver and puzzle generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle (81 chars with 0 or . for blanks) from a file or stdin
    Solve {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Generate a puzzle at the given difficulty
    Generate {
        #[arg(short, long, value_enum, default_value_t = Level::Medium)]
        level: Level,
        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Also print the solution
        #[arg(long)]
        solution: bool,
        /// Emit puzzle and solution as JSON
        #[cfg(feature = "serde")]
        #[arg(long)]
        json: bool,
    },
    /// Report conflicts and completion state of a grid
    Check {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Show the next hint for a puzzle
    Hint {
        /// The puzzle as dealt
        #[arg(short, long)]
        puzzle: PathBuf,
        /// Current play state; defaults to the puzzle itself
        #[arg(short, long)]
        current: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
    Expert,
    Evil,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
            Level::Expert => Difficulty::Expert,
            Level::Evil => Difficulty::Evil,
        }
    }
}

fn read_grid(input: &Option<PathBuf>) -> Result<Grid> {
    let s = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let filtered: String = s.chars().filter(|ch| matches!(ch, '0'..='9' | '.' | '_')).collect();
    if filtered.len() < 81 {
        bail!("expected at least 81 digits/dots in input (have {})", filtered.len())
    }
    let compact: String = filtered.chars().take(81).collect();
    Ok(Grid::parse(&compact)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { input } => {
            let grid = read_grid(&input)?;
            let solved = solver::solve(&grid).context("solve puzzle")?;
            println!("{}", "Solved grid:".bold());
            print!("{solved}");
        }
        Command::Generate {
            level,
            seed,
            solution,
            #[cfg(feature = "serde")]
            json,
        } => {
            let mut generator = PuzzleGenerator::new(seed);
            let (puzzle, full) = generator.generate(level.into()).context("generate puzzle")?;
            #[cfg(feature = "serde")]
            if json {
                let out = serde_json::json!({ "puzzle": puzzle, "solution": full });
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }
            println!(
                "{} ({} givens)",
                format!("{} puzzle:", Difficulty::from(level)).bold(),
                puzzle.filled_count()
            );
            print!("{puzzle}");
            println!("{}", puzzle.to_compact());
            if solution {
                println!("\n{}", "Solution:".bold());
                print!("{full}");
            }
        }
        Command::Check { input } => {
            let grid = read_grid(&input)?;
            print!("{grid}");
            let conflicts = grid.conflicts();
            if conflicts.is_empty() {
                println!("{}", "No conflicts.".green());
            } else {
                let cells = conflicts
                    .iter()
                    .map(|(r, c)| format!("({r}, {c})"))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{} {}", "Conflicts at:".red().bold(), cells.red());
            }
            if grid.is_complete_and_valid() {
                println!("{}", "Board is complete and valid.".green().bold());
            } else {
                println!(
                    "{} of 81 cells filled (looks {})",
                    grid.filled_count(),
                    Difficulty::classify(&grid)
                );
            }
        }
        Command::Hint { puzzle, current } => {
            let original = read_grid(&Some(puzzle))?;
            let played = match current {
                Some(p) => read_grid(&Some(p))?,
                None => original.clone(),
            };
            match solver::next_hint(&original, &played).context("derive hint")? {
                Some(hint) => println!(
                    "{} place {} at row {}, column {}",
                    "Hint:".bold(),
                    hint.value.to_string().green().bold(),
                    hint.row,
                    hint.col
                ),
                None => println!("No hints available: all cells are filled."),
            }
        }
    }
    Ok(())
}
