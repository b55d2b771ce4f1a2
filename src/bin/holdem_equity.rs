use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use holdem_equity::deck::Deck;
use holdem_equity::equity::{count_outcomes, EquityRequest};
use holdem_equity::hand::{Board, HoleCards};
use std::io::{self, BufRead, Write};

/// Exact heads-up equity over every unknown turn/river completion.
///
/// With no cards given, prompts for them on stdin.
#[derive(Parser, Debug)]
#[command(name = "holdem-equity", version = holdem_equity::VERSION)]
struct Args {
    /// Player 1 hole cards, e.g. "As Ah" or "14S 14H"
    #[arg(long, requires_all = ["p2", "board"])]
    p1: Option<String>,
    /// Player 2 hole cards
    #[arg(long)]
    p2: Option<String>,
    /// 3 or 4 community cards, e.g. "Ad Kd 2c"
    #[arg(long)]
    board: Option<String>,
    /// Deal a random scenario from this seed instead of reading cards
    #[arg(long, conflicts_with = "p1")]
    seed: Option<u64>,
    /// Street to deal to when using --seed
    #[arg(long, value_enum, default_value_t = StreetArg::Turn)]
    street: StreetArg,
    /// Decimal places in the printed percentages
    #[arg(long, default_value_t = 2)]
    precision: usize,
    /// Also print the cards left in the deck
    #[arg(long)]
    show_deck: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StreetArg {
    Flop,
    Turn,
}

impl StreetArg {
    fn board_len(self) -> usize {
        match self {
            StreetArg::Flop => 3,
            StreetArg::Turn => 4,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let request = match (&args.p1, &args.p2, &args.board, args.seed) {
        (Some(p1), Some(p2), Some(board), _) => EquityRequest::new(
            p1.parse().context("player 1")?,
            p2.parse().context("player 2")?,
            board.parse().context("community cards")?,
        )?,
        (_, _, _, Some(seed)) => deal(seed, args.street)?,
        _ => prompt(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    log::info!(
        "player 1 [{}] vs player 2 [{}] on [{}]",
        request.player_one(),
        request.player_two(),
        request.board(),
    );

    if args.show_deck {
        println!("Deck: {}", request.deck());
    }
    let counts = count_outcomes(&request)?;
    let equity = counts.equity()?;
    println!("\n{:.*}", args.precision, equity);
    log::info!("{} completions: {:?}", counts.total(), counts);
    Ok(())
}

/// Draw both hands and the board off a seeded shuffle.
fn deal(seed: u64, street: StreetArg) -> anyhow::Result<EquityRequest> {
    let cards = Deck::standard().shuffled_seeded(seed);
    let player_one = HoleCards::try_from(&cards[0..2])?;
    let player_two = HoleCards::try_from(&cards[2..4])?;
    let board = Board::try_new(cards[4..4 + street.board_len()].to_vec())?;
    println!("Player 1: {player_one}");
    println!("Player 2: {player_two}");
    println!("Board: {board}");
    Ok(EquityRequest::new(player_one, player_two, board)?)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> anyhow::Result<EquityRequest> {
    let count: usize = ask(input, out, "Enter number of cards in community: ")?
        .parse()
        .context("number of community cards")?;
    if count != 3 && count != 4 {
        bail!("Invalid number of cards in community - please only enter 3 or 4");
    }
    let player_one: HoleCards = ask(input, out, "Enter player 1 cards (e.g. As Ah): ")?.parse()?;
    let player_two: HoleCards = ask(input, out, "Enter player 2 cards: ")?.parse()?;
    let board: Board = ask(input, out, "Enter the cards on the table: ")?.parse()?;
    if board.len() != count {
        bail!("expected {count} cards on the table, got {}", board.len());
    }
    Ok(EquityRequest::new(player_one, player_two, board)?)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> anyhow::Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}
