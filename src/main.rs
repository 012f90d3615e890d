#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};
#[cfg(feature = "std")]
use tictactoe::{
    init_logging, print_board, print_result, print_scoreboard, CliPlayer, CpuPlayer, Difficulty,
    Mark, Session,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Tier {
    Easy,
    Medium,
    Hard,
}

#[cfg(feature = "std")]
impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Symbol {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<Symbol> for Mark {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Mark::X,
            Symbol::O => Mark::O,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play rounds against the CPU.
    Play {
        #[arg(long, value_enum, default_value_t = Tier::Easy)]
        difficulty: Tier,
        #[arg(long, value_enum, default_value_t = Symbol::X, help = "Mark you play as; X always opens the round")]
        symbol: Symbol,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch a CPU-vs-CPU game.
    Watch {
        #[arg(long, value_enum, default_value_t = Tier::Hard, help = "Tier playing X")]
        x: Tier,
        #[arg(long, value_enum, default_value_t = Tier::Medium, help = "Tier playing O")]
        o: Tier,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            symbol,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let human_mark: Mark = symbol.into();
            let mut session = Session::new(difficulty.into(), human_mark);
            let mut human = CliPlayer::new();

            println!(
                "You are {} against a {:?} CPU. X opens every round.",
                human_mark,
                session.difficulty()
            );
            loop {
                loop {
                    print_board(session.engine().board());
                    if !session.turn_is_human() {
                        println!("CPU is thinking...");
                    }
                    let outcome = session.step(&mut human, &mut rng).await?;
                    if outcome.is_terminal() {
                        print_board(session.engine().board());
                        print_result(session.engine().board(), outcome, human_mark);
                        print_scoreboard(session.scoreboard(), human_mark);
                        break;
                    }
                }
                if !prompt_yes_no("Next round? [Y/n] ")? {
                    break;
                }
                session.reset_round();
            }
            // quitting back to the menu wipes the scores
            session.reset_scores();
            println!("Thanks for playing!");
        }
        Commands::Watch { x, o, seed } => {
            let mut rng = make_rng(seed);
            // the "human" slot holds the X-playing CPU
            let mut session = Session::new(o.into(), Mark::X);
            let mut x_cpu = CpuPlayer::new(x.into());

            println!("Watching {:?} (X) vs {:?} (O)...", x, o);
            loop {
                print_board(session.engine().board());
                let outcome = session.step(&mut x_cpu, &mut rng).await?;
                if outcome.is_terminal() {
                    print_board(session.engine().board());
                    print_result(session.engine().board(), outcome, Mark::X);
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt_yes_no(prompt: &str) -> anyhow::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    let n = io::stdin().read_line(&mut line)?;
    if n == 0 {
        return Ok(false);
    }
    Ok(!matches!(line.trim(), "n" | "N" | "no" | "q" | "quit"))
}
