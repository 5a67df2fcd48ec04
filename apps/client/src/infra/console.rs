//! Console prompt flows: numbered menus on stdout, selections on stdin.
//!
//! Every flow resolves its completion callback synchronously once the
//! player has answered the dialog. Emitted actions go to stdout as JSON
//! lines via [`JsonLineTransport`]; logs go to stderr, so the two streams
//! never interleave.

use std::io::BufRead;

use crate::dispatch::flows::{
    ArchitectContext, BuildChoice, BuildContext, Completion, FollowContext, FountainContext,
    GiveCardsContext, LaborerChoice, LaborerContext, LeadContext, LegionaryContext,
    MerchantChoice, MerchantContext, PromptFlows, RepeatedCompletion, StairwayContext,
    TakePoolContext,
};
use crate::domain::cards::{Card, Role};
use crate::domain::snapshot::GameSnapshot;
use crate::errors::ClientError;
use crate::protocol::action::{ActionArg, ActionKind, NetworkAction};
use crate::protocol::transport::Transport;

/// What the console can render for the current snapshot: the local hand
/// and the shared pool, owned so flows need no snapshot lifetime.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSurface {
    pub hand: Vec<Card>,
    pub pool: Vec<Card>,
}

impl ConsoleSurface {
    pub fn from_snapshot(snapshot: &GameSnapshot, local_user: &str) -> Self {
        let hand = snapshot
            .players
            .iter()
            .find(|p| p.name == local_user)
            .map(|p| p.hand.clone())
            .unwrap_or_default();
        Self {
            hand,
            pool: snapshot.pool.clone(),
        }
    }
}

/// Prints each delivered action as one JSON line on stdout.
pub struct JsonLineTransport;

impl Transport for JsonLineTransport {
    fn deliver(&self, action: NetworkAction) -> Result<(), ClientError> {
        let line = serde_json::to_string(&action).map_err(|e| ClientError::Transport(e.to_string()))?;
        println!("{line}");
        Ok(())
    }
}

pub struct ConsolePrompts {
    input: Box<dyn BufRead>,
}

impl ConsolePrompts {
    pub fn new() -> Self {
        Self::from_reader(Box::new(std::io::BufReader::new(std::io::stdin())))
    }

    pub fn from_reader(input: Box<dyn BufRead>) -> Self {
        Self { input }
    }

    fn read_line(&mut self) -> String {
        let mut line = String::new();
        // EOF or a read error falls back to an empty answer.
        let _ = self.input.read_line(&mut line);
        line.trim().to_string()
    }

    /// Numbered menu; re-prompts until a valid 1-based selection arrives.
    /// EOF selects the first option so scripted replays terminate.
    fn choose(&mut self, prompt: &str, options: &[String]) -> usize {
        println!("{prompt}");
        for (i, option) in options.iter().enumerate() {
            println!("  [{:2}] {option}", i + 1);
        }
        loop {
            let line = self.read_line();
            if line.is_empty() {
                return 0;
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return n - 1,
                _ => println!("Enter [1-{}]:", options.len()),
            }
        }
    }

    fn choose_bool(&mut self, prompt: &str, yes: &str, no: &str) -> bool {
        self.choose(prompt, &[yes.to_string(), no.to_string()]) == 0
    }

    /// Card menu with an optional skip entry at the top.
    fn choose_card(&mut self, prompt: &str, cards: &[Card], skip: Option<&str>) -> Option<Card> {
        let mut options = Vec::new();
        if let Some(label) = skip {
            options.push(label.to_string());
        }
        options.extend(cards.iter().map(|c| c.to_string()));
        if options.is_empty() {
            return None;
        }
        let picked = self.choose(prompt, &options);
        match skip {
            Some(_) if picked == 0 => None,
            Some(_) => cards.get(picked - 1).cloned(),
            None => cards.get(picked).cloned(),
        }
    }

    /// Free-form card name; blank means no card.
    fn read_card(&mut self, prompt: &str) -> Option<Card> {
        println!("{prompt} (blank to skip):");
        let line = self.read_line();
        if line.is_empty() {
            None
        } else {
            Some(Card::new(line))
        }
    }

    fn read_cards(&mut self, prompt: &str) -> Vec<Card> {
        println!("{prompt} (comma-separated, blank for none):");
        let line = self.read_line();
        line.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Card::from)
            .collect()
    }

    fn choose_role(&mut self, prompt: &str) -> Role {
        let options: Vec<String> = Role::ALL.iter().map(|r| r.to_string()).collect();
        Role::ALL[self.choose(prompt, &options)]
    }

    fn build_choice(&mut self, ctx: BuildContext) -> BuildChoice {
        let building = self.read_card("Building to start or add to");
        let material = self.read_card("Material card to add");
        let site = {
            println!(
                "Site to start on{} (blank when adding):",
                if ctx.oot_allowed { ", out of town allowed" } else { "" }
            );
            let line = self.read_line();
            if line.is_empty() {
                None
            } else {
                Some(line)
            }
        };
        BuildChoice {
            building,
            material,
            site,
        }
    }
}

impl Default for ConsolePrompts {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptFlows for ConsolePrompts {
    type Surface = ConsoleSurface;

    fn lead_or_thinker(
        &mut self,
        surface: &mut ConsoleSurface,
        ctx: LeadContext,
        done: Completion<(ActionKind, Vec<ActionArg>)>,
    ) {
        if self.choose_bool("Start of turn:", "Thinker", "Lead a role") {
            let jack = self.choose_bool("Thinker type:", "Thinker for Jack", "Thinker for cards");
            done((ActionKind::ThinkerType, vec![ActionArg::Bool(jack)]));
        } else {
            let role = self.choose_role("Role to lead:");
            let prompt = if ctx.has_palace {
                "Card to lead with (Palace active)"
            } else {
                "Card to lead with"
            };
            let card = self
                .choose_card(prompt, &surface.hand.clone(), None)
                .unwrap_or_else(|| Card::new("Jack"));
            done((
                ActionKind::LeadRole,
                vec![
                    ActionArg::Text(role.to_string()),
                    ActionArg::Number(1),
                    ActionArg::from(card),
                ],
            ));
        }
    }

    fn thinker_type(
        &mut self,
        _surface: &mut ConsoleSurface,
        done: Completion<(ActionKind, Vec<ActionArg>)>,
    ) {
        let jack = self.choose_bool("Thinker type:", "Thinker for Jack", "Thinker for cards");
        done((ActionKind::ThinkerType, vec![ActionArg::Bool(jack)]));
    }

    fn follow_role(
        &mut self,
        surface: &mut ConsoleSurface,
        ctx: FollowContext,
        mut done: RepeatedCompletion,
    ) {
        let led = ctx
            .role_led
            .map(|r| r.to_string())
            .unwrap_or_else(|| "role".to_string());
        if self.choose_bool(
            &format!("{led} was led:"),
            &format!("Follow the {led}"),
            "Thinker instead",
        ) {
            let card = self.choose_card("Card to follow with", &surface.hand.clone(), None);
            let mut args = vec![ActionArg::Bool(false)];
            args.extend(card.map(ActionArg::from));
            done(ActionKind::FollowRole, args);
        } else {
            done(ActionKind::FollowRole, vec![ActionArg::Bool(true)]);
        }
    }

    fn patron_from_hand(&mut self, surface: &mut ConsoleSurface, done: Completion<Option<Card>>) {
        let card = self.choose_card(
            "Patron, choose a client from hand",
            &surface.hand.clone(),
            Some("Skip patron from hand"),
        );
        done(card);
    }

    fn patron_from_pool(&mut self, surface: &mut ConsoleSurface, done: Completion<Option<Card>>) {
        let card = self.choose_card(
            "Patron, choose a client from the pool",
            &surface.pool.clone(),
            Some("Skip patron from pool"),
        );
        done(card);
    }

    fn use_latrine(&mut self, surface: &mut ConsoleSurface, done: Completion<Option<Card>>) {
        let card = self.choose_card(
            "Card to discard with the Latrine",
            &surface.hand.clone(),
            Some("Skip discard"),
        );
        done(card);
    }

    fn use_sewer(&mut self, _surface: &mut ConsoleSurface, done: Completion<Vec<Card>>) {
        done(self.read_cards("Camp cards to move to stockpile with the Sewer"));
    }

    fn patron_from_deck(&mut self, _surface: &mut ConsoleSurface, done: Completion<bool>) {
        done(self.choose_bool("Patron:", "Take a card from the deck", "Skip patron from deck"));
    }

    fn use_vomitorium(&mut self, _surface: &mut ConsoleSurface, done: Completion<bool>) {
        done(self.choose_bool("Vomitorium:", "Discard all", "Skip Vomitorium"));
    }

    fn bar_or_aqueduct(&mut self, _surface: &mut ConsoleSurface, done: Completion<bool>) {
        done(self.choose_bool("Order:", "Bar then Aqueduct", "Aqueduct then Bar"));
    }

    fn use_fountain(&mut self, _surface: &mut ConsoleSurface, done: Completion<bool>) {
        done(self.choose_bool("Fountain:", "Use Fountain", "Don't use Fountain"));
    }

    fn skip_thinker(&mut self, _surface: &mut ConsoleSurface, done: Completion<bool>) {
        done(self.choose_bool("Thinker action:", "Perform thinker", "Skip thinker"));
    }

    fn use_senate(&mut self, _surface: &mut ConsoleSurface, done: Completion<Vec<ActionArg>>) {
        let take = self.choose_bool("Senate:", "Take the Jack", "Don't take the Jack");
        done(vec![ActionArg::Bool(take)]);
    }

    fn laborer(
        &mut self,
        surface: &mut ConsoleSurface,
        ctx: LaborerContext,
        done: Completion<LaborerChoice>,
    ) {
        let from_pool = self.choose_card(
            "Laborer, card from the pool",
            &surface.pool.clone(),
            Some("No pool card"),
        );
        let from_hand = if ctx.has_dock {
            self.choose_card(
                "Dock active, card from hand",
                &surface.hand.clone(),
                Some("No hand card"),
            )
        } else {
            None
        };
        done(LaborerChoice {
            from_hand,
            from_pool,
        });
    }

    fn merchant(
        &mut self,
        _surface: &mut ConsoleSurface,
        ctx: MerchantContext,
        done: Completion<MerchantChoice>,
    ) {
        let from_stockpile = self.read_card("Merchant, card from stockpile");
        let from_hand = if ctx.has_basilica {
            self.read_card("Basilica active, card from hand")
        } else {
            None
        };
        let from_deck = if ctx.has_atrium {
            self.choose_bool("Atrium:", "Also take from deck", "Skip the deck")
        } else {
            false
        };
        done(MerchantChoice {
            from_stockpile,
            from_hand,
            from_deck,
        });
    }

    fn craftsman(
        &mut self,
        _surface: &mut ConsoleSurface,
        ctx: BuildContext,
        done: Completion<BuildChoice>,
    ) {
        println!("Craftsman:");
        done(self.build_choice(ctx));
    }

    fn fountain_build(
        &mut self,
        _surface: &mut ConsoleSurface,
        ctx: FountainContext,
        done: Completion<BuildChoice>,
    ) {
        match &ctx.fountain_card {
            Some(card) => println!("Fountain drew {card}:"),
            None => println!("Fountain:"),
        }
        done(self.build_choice(ctx.build));
    }

    fn architect(
        &mut self,
        _surface: &mut ConsoleSurface,
        ctx: ArchitectContext,
        done: Completion<(BuildChoice, bool)>,
    ) {
        println!("Architect:");
        let choice = self.build_choice(ctx.build);
        let from_pool = ctx.has_archway
            && self.choose_bool("Archway:", "Material from the pool", "Material from stockpile");
        done((choice, from_pool));
    }

    fn stairway(
        &mut self,
        _surface: &mut ConsoleSurface,
        _ctx: StairwayContext,
        done: Completion<(Option<Card>, Option<Card>)>,
    ) {
        let building = self.read_card("Stairway, opponent building to add to");
        let material = if building.is_some() {
            self.read_card("Material to add")
        } else {
            None
        };
        done((building, material));
    }

    fn prison(&mut self, _surface: &mut ConsoleSurface, done: Completion<Option<Card>>) {
        done(self.read_card("Prison, opponent building to steal"));
    }

    fn legionary(
        &mut self,
        surface: &mut ConsoleSurface,
        ctx: LegionaryContext,
        done: Completion<Vec<Card>>,
    ) {
        let mut cards = Vec::new();
        for i in 0..ctx.count {
            match self.choose_card(
                &format!("Legionary demand {} of {}", i + 1, ctx.count),
                &surface.hand.clone(),
                Some("Stop demanding"),
            ) {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        done(cards);
    }

    fn give_cards(
        &mut self,
        _surface: &mut ConsoleSurface,
        ctx: GiveCardsContext,
        done: Completion<Vec<Card>>,
    ) {
        if ctx.immune {
            println!("Defenses hold; nothing to give.");
            done(Vec::new());
            return;
        }
        let demanded: Vec<String> = ctx.demanded.iter().map(|m| m.to_string()).collect();
        done(self.read_cards(&format!("Cards to surrender ({})", demanded.join(", "))))
    }

    fn take_pool_cards(
        &mut self,
        _surface: &mut ConsoleSurface,
        ctx: TakePoolContext,
        done: Completion<Vec<Card>>,
    ) {
        let demanded: Vec<String> = ctx.demanded.iter().map(|m| m.to_string()).collect();
        done(self.read_cards(&format!("Pool cards to take ({})", demanded.join(", "))))
    }
}
