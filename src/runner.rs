use clap::{Parser, ValueEnum};

use crate::prelude::*;

/// The standard opening position: twelve men a side, White at the bottom.
pub const STANDARD: &str = "mmmm/mmmm/mmmm/4/4/MMMM/MMMM/MMMM";

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct RunnerOptions
{
    #[arg(short, long, default_value = STANDARD)]
    /// position code to start from
    pub position: String,

    #[arg(long)]
    /// move already played on the starting position, in move notation
    pub last: Option<String>,

    #[arg(short, long, default_value = "Black")]
    /// color to move first
    pub first: Color,

    #[arg(long, default_value_t = 5)]
    /// search depth in plies for White
    pub white_depth: Depth,

    #[arg(long, default_value_t = 5)]
    /// search depth in plies for Black
    pub black_depth: Depth,

    #[arg(long, value_enum, default_value_t = HeuristicKind::Material)]
    /// position heuristic used by both sides
    pub heuristic: HeuristicKind,

    #[arg(long, default_value_t = false)]
    /// whether to search captures first
    pub ordered: bool,

    #[arg(long, default_value_t = 0)]
    /// maximum entries per side in the transposition table (0 disables it)
    pub table_capacity: u64,

    #[arg(long, default_value_t = 200)]
    /// number of plies after which the game is drawn
    pub max_plies: usize,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
/// The heuristics selectable from the command line.
pub enum HeuristicKind
{
    Material,
    Mobility,
}

impl Heuristic for HeuristicKind
{
    fn evaluate(&self, board: &Board, color: Color) -> f64
    {
        match self
        {
            | Self::Material => Material.evaluate(board, color),
            | Self::Mobility => Mobility(Draughts).evaluate(board, color),
        }
    }
}

#[derive(Clone, Debug)]
/// What happened in a finished game.
pub struct GameRecord
{
    /// Every move played, in move notation.
    pub transcript: Vec<String>,
    pub state:      GameState,
    /// The position code of the final board.
    pub position:   String,
    /// The number of candidate paths both sides examined.
    pub explored:   u64,
}

/// Plays a game between two search engines.
pub struct Runner
{
    options:  RunnerOptions,
    board:    Board,
    tables:   [Option<TranspositionTable>; 2],
    explored: u64,
}

impl Runner
{
    /// Sets up a game with the given options, playing the optional last move on the starting position.
    pub fn new(options: RunnerOptions) -> Result<Self>
    {
        if options.white_depth == 0 || options.black_depth == 0
        {
            return Err(Error::new(Kind::InvalidOption, "Both sides must search at least one ply.".into()));
        }

        let mut registry = Registry::default();
        let mut board = Board::new();
        crate::notation::decode(&options.position, &mut registry, &mut board)?;
        log::debug!(
            "loaded {} White and {} Black pieces",
            registry.count(Color::White),
            registry.count(Color::Black)
        );

        if !crate::notation::decrypt(&mut board, options.last.as_deref())?
        {
            let err_msg = format!("{} cannot be played on {}.", options.last.as_deref().unwrap_or(""), options.position);
            return Err(Error::new(Kind::InvalidMove, err_msg));
        }

        let tables = match options.table_capacity
        {
            | 0 => [None, None],
            | capacity => [Some(TranspositionTable::new(capacity)), Some(TranspositionTable::new(capacity))],
        };

        Ok(Runner {
            options,
            board,
            tables,
            explored: 0,
        })
    }

    /// Gets the current board.
    pub fn board(&self) -> &Board
    {
        &self.board
    }

    /// Plays the game out until one side cannot move or the ply limit is reached.
    pub fn run(&mut self) -> Result<GameRecord>
    {
        let mut to_move = self.options.first;
        let mut transcript = Vec::new();

        let state = loop
        {
            if transcript.len() >= self.options.max_plies
            {
                break GameState::Draw;
            }

            let outcome = self.think(to_move)?;
            let Some(path) = outcome.path
            else
            {
                log::info!("{} has no legal move", to_move);
                break GameState::stalemated(to_move);
            };

            // Move text only names the endpoints, so the searched path itself is played.
            let path = path.translate(&self.board)?;
            self.board.play(&path).map_err(Error::internal)?;
            let text = crate::notation::encrypt(to_move, &path);

            println!("{}", text);
            log::info!("{: >3}. {} {} scored {}", transcript.len() + 1, to_move, text, outcome.value);
            log::trace!("\n{}", self.board);

            transcript.push(text);
            to_move = to_move.flip();
        };

        let position = crate::notation::encode(&self.board);
        log::info!("{} after {} plies: {}", state, transcript.len(), position);

        Ok(GameRecord {
            transcript,
            state,
            position,
            explored: self.explored,
        })
    }

    /// Searches for the move of the given color on the current board.
    fn think(&mut self, color: Color) -> Result<Outcome>
    {
        let depth = match color
        {
            | Color::White => self.options.white_depth,
            | Color::Black => self.options.black_depth,
        };
        let config = SearchConfig::new(color, self.board.duplicate(), depth, self.options.heuristic);

        if self.options.ordered
        {
            self.think_with(config, CapturesFirst(Draughts))
        }
        else
        {
            self.think_with(config, Draughts)
        }
    }

    /// Runs one search, lending the color's transposition table to the engine if there is one.
    fn think_with<G: MoveGenerator>(&mut self, config: SearchConfig<HeuristicKind>, generator: G) -> Result<Outcome>
    {
        let slot = &mut self.tables[config.color as usize];

        match slot.take()
        {
            | Some(table) =>
            {
                let mut engine = Minimax::new(config, generator).with_memo(table);
                let outcome = engine.best_move();
                self.explored += engine.explored();
                log::trace!("{:?}", engine.memo());
                *slot = Some(engine.into_memo());
                outcome
            }
            | None =>
            {
                let mut engine = Minimax::new(config, generator);
                let outcome = engine.best_move();
                self.explored += engine.explored();
                outcome
            }
        }
    }
}
