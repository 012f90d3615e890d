use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{CpuPlayer, Difficulty, Mark, RoundOutcome, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: {} <x-tier> <o-tier> <games> <seed>", args[0]);
        eprintln!("Tiers: easy, medium, hard");
        std::process::exit(1);
    }
    let x_tier: Difficulty = args[1].parse().map_err(|e| anyhow::anyhow!("{}", e))?;
    let o_tier: Difficulty = args[2].parse().map_err(|e| anyhow::anyhow!("{}", e))?;
    let games: u32 = args[3].parse()?;
    let seed: u64 = args[4].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    // the "human" slot of the session holds the X-playing CPU
    let mut session = Session::new(o_tier, Mark::X).without_thinking_delay();
    let mut x_cpu = CpuPlayer::new(x_tier);

    let mut x_wins = 0u32;
    let mut o_wins = 0u32;
    let mut draws = 0u32;

    for _ in 0..games {
        session.reset_round();
        match session.play_round(&mut x_cpu, &mut rng).await? {
            RoundOutcome::Win(Mark::X) => x_wins += 1,
            RoundOutcome::Win(Mark::O) => o_wins += 1,
            RoundOutcome::Draw => draws += 1,
            RoundOutcome::InProgress => anyhow::bail!("play_round returned a live round"),
        }
    }

    let result = json!({
        "x": {"tier": format!("{:?}", x_tier), "wins": x_wins},
        "o": {"tier": format!("{:?}", o_tier), "wins": o_wins},
        "draws": draws,
        "games": games,
        "seed": seed,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
