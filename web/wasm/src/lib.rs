use core::time::Duration;

use jouster::seed::mint_seed_from_entropy;
use jouster::{
    Card, Game, GameOptions, GameResult, GameState, InspectTarget, MoveOutcome, RejectReason,
    SelectOutcome, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Deals from `seed`. Every `now_ms` argument is a page timestamp such
    /// as `performance.now()`; the engine has no clock of its own here.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &str, now_ms: f64) -> Result<WasmGame, JsValue> {
        let game =
            Game::new_at(GameOptions::default(), seed, from_ms(now_ms)).map_err(js_err)?;
        Ok(Self { game })
    }

    /// Starts from a freshly minted seed. The caller supplies the entropy
    /// (e.g. two `Math.random()` words).
    pub fn fresh(high: u32, low: u32, now_ms: f64) -> Result<WasmGame, JsValue> {
        let seed = mint_seed_from_entropy(entropy(high, low));
        Self::new(&seed, now_ms)
    }

    pub fn seed(&self) -> String {
        self.game.seed().to_string()
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.game.tick(from_ms(now_ms));
    }

    pub fn restart(&mut self, now_ms: f64) {
        self.tick(now_ms);
        self.game.restart();
    }

    pub fn restart_with_seed(&mut self, seed: &str, now_ms: f64) -> Result<(), JsValue> {
        self.tick(now_ms);
        self.game.restart_with_seed(seed).map_err(js_err)
    }

    pub fn restart_fresh(&mut self, high: u32, low: u32, now_ms: f64) {
        self.tick(now_ms);
        self.game.restart_fresh(entropy(high, low));
    }

    pub fn select(&mut self, index: u32, now_ms: f64) -> Result<JsValue, JsValue> {
        self.tick(now_ms);
        let outcome = self.game.select(index as usize).map_err(js_err)?;
        to_js_value(&JsSelectOutcome::from(outcome))
    }

    pub fn attempt_move(
        &mut self,
        source: u32,
        target: u32,
        now_ms: f64,
    ) -> Result<JsValue, JsValue> {
        self.tick(now_ms);
        let outcome = self
            .game
            .attempt_move(source as usize, target as usize)
            .map_err(js_err)?;
        to_js_value(&JsMoveOutcome::from(outcome))
    }

    pub fn clear_selection(&mut self) {
        self.game.clear_selection();
    }

    pub fn inspect_pile(&self, index: u32) -> Result<JsValue, JsValue> {
        self.inspect(InspectTarget::Pile(index as usize))
    }

    pub fn inspect_deck(&self) -> Result<JsValue, JsValue> {
        self.inspect(InspectTarget::Deck)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let view = self.game.view();

        let snapshot = Snapshot {
            seed: self.game.seed(),
            state: state_to_str(self.game.state()),
            piles: view
                .piles
                .iter()
                .map(|pile| pile.cards().iter().copied().map(card_to_js).collect())
                .collect(),
            deck_remaining: view.deck_remaining as u32,
            selected: view.selected.map(|index| index as u32),
            valid_targets: view
                .valid_targets
                .into_iter()
                .map(|index| index as u32)
                .collect(),
            result: view.result.map(JsGameResult::from),
            elapsed_ms: view.elapsed.map(to_ms),
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn inspect(&self, target: InspectTarget) -> Result<JsValue, JsValue> {
        let cards: Vec<JsCard> = self
            .game
            .inspect(target)
            .map_err(js_err)?
            .into_iter()
            .map(card_to_js)
            .collect();
        to_js_value(&cards)
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    seed: &'a str,
    state: &'static str,
    piles: Vec<Vec<JsCard>>,
    deck_remaining: u32,
    selected: Option<u32>,
    valid_targets: Vec<u32>,
    result: Option<JsGameResult>,
    elapsed_ms: Option<f64>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: String,
}

#[derive(Serialize)]
struct JsGameResult {
    score: f64,
    score_label: String,
    piles_left: u32,
    min_pile_size: u32,
    deck_remaining: u32,
    elapsed_ms: Option<f64>,
}

impl From<GameResult> for JsGameResult {
    fn from(result: GameResult) -> Self {
        Self {
            score: result.score.value(),
            score_label: result.score.to_string(),
            piles_left: result.piles_left as u32,
            min_pile_size: result.min_pile_size as u32,
            deck_remaining: result.deck_remaining as u32,
            elapsed_ms: result.elapsed.map(to_ms),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsSelectOutcome {
    Selected { index: u32 },
    Moved { outcome: JsMoveOutcome },
    Ignored,
}

impl From<SelectOutcome> for JsSelectOutcome {
    fn from(outcome: SelectOutcome) -> Self {
        match outcome {
            SelectOutcome::Selected(index) => Self::Selected {
                index: index as u32,
            },
            SelectOutcome::Moved(outcome) => Self::Moved {
                outcome: outcome.into(),
            },
            SelectOutcome::Ignored => Self::Ignored,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsMoveOutcome {
    Accepted { target: u32, dealt: Option<JsCard> },
    Rejected { reason: &'static str },
}

impl From<MoveOutcome> for JsMoveOutcome {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Accepted { target, dealt } => Self::Accepted {
                target: target as u32,
                dealt: dealt.map(card_to_js),
            },
            MoveOutcome::Rejected(reason) => Self::Rejected {
                reason: reason_to_str(reason),
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.value(),
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Idle => "Idle",
        GameState::Selected { .. } => "Selected",
        GameState::GameOver => "GameOver",
    }
}

fn reason_to_str(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::NotAdjacent => "NotAdjacent",
        RejectReason::NoMatch => "NoMatch",
        RejectReason::GameOver => "GameOver",
    }
}

fn entropy(high: u32, low: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

/// Negative and non-finite timestamps count as zero.
fn from_ms(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::ZERO)
}

fn to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
