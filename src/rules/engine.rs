//! The turn engine.
//!
//! `TurnEngine` owns every piece of match state and is the only thing that
//! mutates it. The presentation layer drives it with three commands and reads
//! back a `MatchSnapshot` and the `EventLog`:
//!
//! - `play_card(index)`: summon a monster or fire a support card
//! - `attack()`: the player's monster attacks the computer's
//! - `end_turn()`: run the computer's whole turn, then start the player's
//!
//! ## Atomicity
//!
//! Every command validates completely before its first mutation. A rejected
//! command leaves the engine exactly as it was.
//!
//! ## Match restarts
//!
//! A win is detected right after the combat that caused it. The engine
//! reports the `MatchResult`, deals a fresh match and enters the new match's
//! first player turn before the command returns.

use serde::{Deserialize, Serialize};

use super::policy::{GreedyOpponent, OpponentPolicy};
use super::session::SessionState;
use super::snapshot::MatchSnapshot;
use crate::cards::Card;
use crate::combat::{CombatResolver, DamageReport};
use crate::core::{Actor, ActorMap, GameRng, MatchConfig, MatchState, Rejection, Result, TurnState};
use crate::effects::{EffectResolver, EffectResult, Stat};
use crate::log::{EventLog, LogSource};
use crate::zones::{Deck, Side};

/// Final tally of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Actor,
    pub match_number: u32,
    pub defeated_by_player: u32,
    pub defeated_by_computer: u32,
}

impl MatchResult {
    #[must_use]
    pub fn is_winner(&self, actor: Actor) -> bool {
        self.winner == actor
    }
}

/// What an accepted command led to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The match goes on.
    Continue,
    /// The match ended; a new one has already begun.
    MatchOver(MatchResult),
}

impl Outcome {
    #[must_use]
    pub fn match_result(&self) -> Option<&MatchResult> {
        match self {
            Outcome::Continue => None,
            Outcome::MatchOver(result) => Some(result),
        }
    }

    #[must_use]
    pub fn is_match_over(&self) -> bool {
        matches!(self, Outcome::MatchOver(_))
    }
}

/// Owns and advances a session of duels.
///
/// ## Example
///
/// ```
/// use monster_duel::{Actor, Rejection, TurnEngine};
///
/// let mut engine = TurnEngine::with_seed(42);
/// assert_eq!(engine.snapshot().active, Actor::Player);
///
/// // A turn cannot end before a monster is on the field.
/// assert_eq!(engine.end_turn(), Err(Rejection::NoMonsterSummoned));
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine<P = GreedyOpponent> {
    config: MatchConfig,
    policy: P,
    rng: GameRng,
    deck: Deck,
    sides: ActorMap<Side>,
    turn: TurnState,
    score: MatchState,
    log: EventLog,
    match_number: u32,
    wins: ActorMap<u32>,
}

impl TurnEngine<GreedyOpponent> {
    /// Start a session against the greedy scripted opponent.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self::with_policy(config, GreedyOpponent)
    }

    /// Standard rules with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(MatchConfig::new().with_seed(seed))
    }
}

impl Default for TurnEngine<GreedyOpponent> {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl<P: OpponentPolicy> TurnEngine<P> {
    /// Start a session with a custom opponent policy.
    ///
    /// The first match is dealt immediately and the player's first turn has
    /// already drawn its card when this returns.
    #[must_use]
    pub fn with_policy(config: MatchConfig, policy: P) -> Self {
        let config = config.normalized();
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut engine = Self {
            config,
            policy,
            rng,
            deck: Deck::default(),
            sides: ActorMap::default(),
            turn: TurnState::default(),
            score: MatchState::new(),
            log: EventLog::new(),
            match_number: 0,
            wins: ActorMap::with_value(0),
        };
        engine.start_match();
        engine
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// An actor's hand and field.
    #[must_use]
    pub fn side(&self, actor: Actor) -> &Side {
        &self.sides[actor]
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn score(&self) -> &MatchState {
        &self.score
    }

    #[must_use]
    pub fn match_number(&self) -> u32 {
        self.match_number
    }

    /// Matches won per actor since the engine was created.
    #[must_use]
    pub fn wins(&self) -> &ActorMap<u32> {
        &self.wins
    }

    /// Seed of the session RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether `end_turn` would be accepted right now.
    #[must_use]
    pub fn can_end_turn(&self) -> bool {
        self.turn.active == Actor::Player && !self.sides[Actor::Player].field.is_empty()
    }

    /// Render-ready view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        let player = &self.sides[Actor::Player];
        let computer = &self.sides[Actor::Computer];

        MatchSnapshot {
            match_number: self.match_number,
            active: self.turn.active,
            player_hand: player.hand.as_slice().to_vec(),
            computer_hand_size: computer.hand.len(),
            player_field: player.field.monster().cloned(),
            computer_field: computer.field.monster().cloned(),
            defeated_by_player: self.score.defeated_by(Actor::Player),
            defeated_by_computer: self.score.defeated_by(Actor::Computer),
            can_end_turn: self.can_end_turn(),
            needs_new_monster: self.turn.needs_new_monster,
            has_played_monster: self.turn.has_played_monster,
            has_attacked: self.turn.has_attacked,
            deck_size: self.deck.len(),
            wins: self.wins.clone(),
        }
    }

    // === Save / restore ===

    /// Capture the whole session, RNG position included.
    #[must_use]
    pub fn save(&self) -> SessionState {
        SessionState {
            config: self.config.clone(),
            rng: self.rng.state(),
            deck: self.deck.clone(),
            sides: self.sides.clone(),
            turn: self.turn.clone(),
            score: self.score.clone(),
            log: self.log.clone(),
            match_number: self.match_number,
            wins: self.wins.clone(),
        }
    }

    /// Resume a saved session.
    ///
    /// The restored engine continues exactly as the saved one would have:
    /// future reshuffles draw from the same RNG position.
    #[must_use]
    pub fn restore(state: SessionState, policy: P) -> Self {
        tracing::info!(
            match_number = state.match_number,
            seed = state.rng.seed,
            "session restored"
        );
        Self {
            config: state.config.normalized(),
            policy,
            rng: GameRng::from_state(&state.rng),
            deck: state.deck,
            sides: state.sides,
            turn: state.turn,
            score: state.score,
            log: state.log,
            match_number: state.match_number,
            wins: state.wins,
        }
    }

    // === Commands ===

    /// Play the card at `index` in the player's hand.
    ///
    /// Monsters go to the field, subject to the one-per-turn quota (lifted
    /// while a defeated monster awaits replacement). Support cards are
    /// always playable and resolve immediately.
    pub fn play_card(&mut self, index: usize) -> Result<Outcome> {
        self.ensure_player_turn()?;

        let side = &self.sides[Actor::Player];
        let card = side.hand.get(index).ok_or_else(|| {
            self.reject(Rejection::InvalidHandIndex {
                index,
                hand_size: side.hand.len(),
            })
        })?;

        if card.is_monster() {
            if !side.field.is_empty() {
                return Err(self.reject(Rejection::FieldOccupied));
            }
            if !self.turn.may_summon() {
                return Err(self.reject(Rejection::MonsterAlreadyPlayed));
            }
        }

        let hand_size = side.hand.len();
        let card = self.sides[Actor::Player]
            .hand
            .take(index)
            .ok_or(Rejection::InvalidHandIndex { index, hand_size })?;
        tracing::debug!(index, card = %card, "player plays card");

        if card.is_monster() {
            self.summon(Actor::Player, card);
        } else {
            self.play_support(Actor::Player, card);
        }
        Ok(Outcome::Continue)
    }

    /// The player's monster attacks the computer's monster.
    ///
    /// Allowed once per turn and only with both fields occupied.
    pub fn attack(&mut self) -> Result<Outcome> {
        self.ensure_player_turn()?;

        if self.turn.has_attacked {
            return Err(self.reject(Rejection::AlreadyAttackedThisTurn));
        }
        if self.sides[Actor::Player].field.is_empty() {
            return Err(self.reject(Rejection::NoAttacker));
        }
        if self.sides[Actor::Computer].field.is_empty() {
            return Err(self.reject(Rejection::NoDefender));
        }

        tracing::debug!("player attacks");
        self.turn.has_attacked = true;
        Ok(self.fight(Actor::Player))
    }

    /// End the player's turn and run the computer's turn to completion.
    ///
    /// The player must have a monster on the field.
    pub fn end_turn(&mut self) -> Result<Outcome> {
        self.ensure_player_turn()?;

        if self.sides[Actor::Player].field.is_empty() {
            return Err(self.reject(Rejection::NoMonsterSummoned));
        }

        tracing::debug!("player ends turn");
        self.turn.active = Actor::Computer;
        let outcome = self.computer_turn();
        if !outcome.is_match_over() {
            self.begin_player_turn();
        }
        Ok(outcome)
    }

    // === Turn sequencing ===

    fn start_match(&mut self) {
        self.match_number += 1;
        self.deck = Deck::build(&mut self.rng);
        self.sides = ActorMap::default();
        self.turn = TurnState::default();
        self.score = MatchState::new();
        tracing::info!(match_number = self.match_number, seed = self.rng.seed(), "match started");

        for _ in 0..self.config.starting_hand_size {
            for actor in Actor::ALL {
                self.draw_for(actor, DrawKind::Turn);
            }
        }
        self.begin_player_turn();
    }

    fn begin_player_turn(&mut self) {
        self.turn.begin_player_turn();
        self.draw_for(Actor::Player, DrawKind::Turn);
    }

    /// Draw, summon, every support card, attack.
    ///
    /// Returns early with `MatchOver` if the attack ends the match; the new
    /// match's player turn has then already begun.
    fn computer_turn(&mut self) -> Outcome {
        let me = Actor::Computer;
        self.draw_for(me, DrawKind::Turn);

        if self.sides[me].field.is_empty() {
            let hand = &self.sides[me].hand;
            let pick = self
                .policy
                .choose_summon(hand)
                .filter(|&i| hand.get(i).is_some_and(Card::is_monster));
            if let Some(card) = pick.and_then(|i| self.sides[me].hand.take(i)) {
                self.summon(me, card);
            }
        }

        // Cards drawn by Scout during this phase wait until next turn.
        let planned = self.sides[me].hand.iter().filter(|c| c.is_support()).count();
        for _ in 0..planned {
            let hand = &self.sides[me].hand;
            let Some(index) = self
                .policy
                .choose_support(hand)
                .filter(|&i| hand.get(i).is_some_and(Card::is_support))
            else {
                break;
            };
            if let Some(card) = self.sides[me].hand.take(index) {
                self.play_support(me, card);
            }
        }

        if self.sides.iter().all(|(_, side)| !side.field.is_empty()) {
            return self.fight(me);
        }
        Outcome::Continue
    }

    // === Card movement ===

    /// Draw one card for `actor`, rebuilding the deck first if it is empty.
    fn draw_for(&mut self, actor: Actor, kind: DrawKind) {
        if self.deck.is_empty() {
            self.deck.reshuffle(&mut self.rng);
            self.record(actor.into(), "The deck is empty! Reshuffling...");
        }

        match self.deck.draw() {
            Ok(card) => {
                let message = match (actor, kind) {
                    (Actor::Player, _) => format!("You drew {}!", card.name),
                    (Actor::Computer, DrawKind::Turn) => "Computer drew a card".to_string(),
                    (Actor::Computer, DrawKind::Extra) => "Computer drew an extra card".to_string(),
                };
                self.record(actor.into(), message);
                self.sides[actor].hand.push(card);
            }
            Err(err) => tracing::error!(%err, %actor, "draw skipped"),
        }
    }

    fn summon(&mut self, actor: Actor, card: Card) {
        let name = card.name.clone();
        if let Err(card) = self.sides[actor].field.place(card) {
            tracing::error!(%actor, card = %card, "summon refused by field, card returned to hand");
            self.sides[actor].hand.push(card);
            return;
        }

        if actor == Actor::Player {
            self.turn.player_monster_placed();
        }
        self.record(actor.into(), format!("{} summoned {}!", subject(actor), name));
    }

    fn play_support(&mut self, actor: Actor, card: Card) {
        self.record(actor.into(), format!("{} played {}!", subject(actor), card.name));

        let Some(effect) = card.effect else {
            return;
        };
        match EffectResolver::resolve(effect, &mut self.sides[actor].field, &self.config) {
            EffectResult::Stats(changes) => {
                for change in changes {
                    let verb = match change.stat {
                        Stat::Health => "healed",
                        Stat::Attack => "attack boosted",
                    };
                    self.record(
                        actor.into(),
                        format!(
                            "{} {} {}! ({} → {} {})",
                            actor.possessive(),
                            change.card,
                            verb,
                            change.before,
                            change.after,
                            change.stat.unit()
                        ),
                    );
                }
            }
            EffectResult::Draw => self.draw_for(actor, DrawKind::Extra),
        }
    }

    // === Combat ===

    /// `attacker`'s monster fights the opposing monster, then the win
    /// condition is checked.
    fn fight(&mut self, attacker: Actor) -> Outcome {
        let defender = attacker.opponent();
        let (attacking, defending) = self.sides.split_mut(attacker);
        let (Some(a), Some(d)) = (attacking.field.monster_mut(), defending.field.monster_mut()) else {
            return Outcome::Continue;
        };

        let report = CombatResolver::resolve(a, d);
        self.record_damage(defender, &report.defender);
        self.record_damage(attacker, &report.attacker);

        if report.defender.defeated() {
            self.destroy(defender);
        }
        if report.attacker.defeated() {
            self.destroy(attacker);
        }

        self.check_win()
    }

    fn record_damage(&mut self, owner: Actor, damage: &DamageReport) {
        self.record(
            LogSource::Battle,
            format!(
                "{} {} takes {} damage! ({} → {} HP)",
                owner.possessive(),
                damage.card,
                damage.damage,
                damage.health_before,
                damage.health_after
            ),
        );
    }

    fn destroy(&mut self, loser: Actor) {
        let Some(card) = self.sides[loser].field.clear() else {
            return;
        };
        self.score.record_defeat(loser.opponent());
        if loser == Actor::Player {
            self.turn.player_monster_lost();
        }
        self.record(
            LogSource::Battle,
            format!("{} {} was defeated!", loser.possessive(), card.name),
        );
    }

    fn check_win(&mut self) -> Outcome {
        let Some(winner) = self.score.winner(self.config.win_threshold) else {
            return Outcome::Continue;
        };

        let result = MatchResult {
            winner,
            match_number: self.match_number,
            defeated_by_player: self.score.defeated_by(Actor::Player),
            defeated_by_computer: self.score.defeated_by(Actor::Computer),
        };
        self.wins[winner] += 1;

        let defeated = self.score.defeated_by(winner);
        let message = match winner {
            Actor::Player => format!("You win! You defeated {defeated} computer monsters!"),
            Actor::Computer => format!("Computer wins! They defeated {defeated} of your monsters!"),
        };
        self.record(LogSource::Battle, message);
        tracing::info!(match_number = self.match_number, %winner, "match over");

        self.start_match();
        Outcome::MatchOver(result)
    }

    // === Helpers ===

    fn ensure_player_turn(&self) -> Result<()> {
        if self.turn.active != Actor::Player {
            return Err(self.reject(Rejection::NotYourTurn));
        }
        Ok(())
    }

    fn reject(&self, rejection: Rejection) -> Rejection {
        tracing::debug!(%rejection, match_number = self.match_number, "command rejected");
        rejection
    }

    fn record(&mut self, source: LogSource, message: impl Into<String>) {
        self.log.push(self.match_number, source, message);
    }
}

/// Why a card is being drawn. Only the computer's log line differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawKind {
    /// Opening deal or start-of-turn draw.
    Turn,
    /// Draw granted by a support effect.
    Extra,
}

/// Sentence subject for log messages.
fn subject(actor: Actor) -> &'static str {
    match actor {
        Actor::Player => "You",
        Actor::Computer => "Computer",
    }
}
