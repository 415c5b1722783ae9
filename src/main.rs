//! Console front end for a single heat-or-stay round.

use std::fs;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use twentyone::{Console, Decision, GameOptions, Participant, Round};

/// Play one round of heat-or-stay blackjack against the dealer.
#[derive(Parser, Debug, Clone)]
#[command(name = "twentyone", version, about = "Heat-or-stay blackjack round")]
struct Cli {
    /// Number of players (prompted for when omitted)
    #[arg(long)]
    players: Option<u8>,

    /// Seed for the shuffle (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// The dealer stays once its sum is above this value
    #[arg(long, default_value_t = 17)]
    dealer_stays_above: u16,

    /// Answer that makes a player stay
    #[arg(long, default_value = "s")]
    stay_keyword: String,

    /// Banner printed before the round starts
    #[arg(long, default_value = "logo.txt")]
    logo: PathBuf,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Reads decisions from stdin and prints the table to stdout.
struct Terminal<R> {
    input: R,
}

impl<R: BufRead> Terminal<R> {
    fn read_line(&mut self) -> String {
        let mut line = String::new();
        if self.input.read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim_end_matches(['\r', '\n']).to_string()
    }

    fn prompt(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();
        self.read_line()
    }
}

impl<R: BufRead> Console for Terminal<R> {
    fn ask(&mut self, participant: &Participant) -> String {
        self.prompt(&format!("{participant} ({}) stay?: ", participant.sum()))
    }

    fn render(&mut self, participant: &Participant) {
        println!("{}", format_participant(participant));
    }

    fn table(&mut self, participants: &[Participant]) {
        for participant in participants {
            self.render(participant);
        }
        println!();
    }

    fn skipped(&mut self, participant: &Participant) {
        if participant.is_busted() {
            println!("{participant} is busted.");
        } else {
            println!("{participant} is staying.");
        }
    }

    fn decided(&mut self, participant: &Participant, decision: Decision) {
        if !participant.is_dealer() {
            return;
        }
        let word = match decision {
            Decision::Heat => "heat",
            Decision::Stay => "stay",
        };
        println!("{participant} ({}) {word}", participant.sum());
    }

    fn announce(&mut self, participants: &[Participant], winner: Option<&Participant>) {
        let Some(winner) = winner else {
            println!("No winner");
            return;
        };
        println!("\n-=[Result]=-");
        self.table(participants);
        println!("Winner is {winner}");
    }
}

fn format_participant(participant: &Participant) -> String {
    let cards = participant
        .hand()
        .cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let busted = if participant.is_busted() {
        " BUSTED!!"
    } else {
        ""
    };
    format!(
        "[{participant}] {cards} => sum: {}{busted}",
        participant.sum()
    )
}

/// Lenient player count: anything that is not a number means no players.
///
/// Counts past `u8::MAX` saturate, so the deal fails on an empty shoe
/// instead of quietly seating nobody. Negative counts seat nobody.
fn parse_player_count(input: &str) -> u8 {
    match input.trim().parse::<i64>() {
        Ok(count) => u8::try_from(count.max(0)).unwrap_or(u8::MAX),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u8::MAX,
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => 0,
        Err(_) => {
            tracing::warn!(input, "player count is not a number, seating no players");
            0
        }
    }
}

fn print_logo(path: &Path) {
    match fs::read_to_string(path) {
        Ok(logo) => println!("{logo}"),
        Err(err) => tracing::debug!(path = %path.display(), %err, "no logo"),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug { "debug" } else { "twentyone=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .with_writer(io::stderr)
        .init();

    print_logo(&cli.logo);

    let mut terminal = Terminal {
        input: io::stdin().lock(),
    };

    let players = match cli.players {
        Some(players) => players,
        None => parse_player_count(&terminal.prompt("Number of players: ")),
    };

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default()
        .with_players(players)
        .with_dealer_stays_above(cli.dealer_stays_above)
        .with_stay_keyword(cli.stay_keyword);

    tracing::info!(players, seed, "starting round");

    let mut round = Round::new(options, seed);
    round
        .play(&mut terminal)
        .with_context(|| format!("round with {players} player(s) aborted"))?;

    Ok(())
}
