//! Card definitions - static card data.
//!
//! A `Card` is created once by the catalog and never mutated. Everything that
//! changes during play (damage, attached energy, status) lives in the board
//! `Slot` that currently holds the card.
//!
//! The three card families form one closed sum type so every `match` over a
//! card is checked for exhaustiveness.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Energy element. Also used as the symbol alphabet of attack costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnergyType {
    Grass,
    Fire,
    Water,
    Lightning,
    Psychic,
    Fighting,
    Darkness,
    Metal,
    /// As a cost symbol, satisfied by energy of any type.
    Colorless,
}

impl std::fmt::Display for EnergyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EnergyType::Grass => "Grass",
            EnergyType::Fire => "Fire",
            EnergyType::Water => "Water",
            EnergyType::Lightning => "Lightning",
            EnergyType::Psychic => "Psychic",
            EnergyType::Fighting => "Fighting",
            EnergyType::Darkness => "Darkness",
            EnergyType::Metal => "Metal",
            EnergyType::Colorless => "Colorless",
        };
        f.write_str(name)
    }
}

/// Evolution stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Basic,
    Stage1,
    Stage2,
}

impl Stage {
    /// Position in the evolution chain (`Basic` = 0).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Stage::Basic => 0,
            Stage::Stage1 => 1,
            Stage::Stage2 => 2,
        }
    }

    /// The stage a card of this stage evolves from, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Stage> {
        match self {
            Stage::Basic => None,
            Stage::Stage1 => Some(Stage::Basic),
            Stage::Stage2 => Some(Stage::Stage1),
        }
    }
}

/// Trainer sub-kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainerKind {
    /// Limited to one per turn.
    Supporter,
    Goods,
    Tool,
    Stadium,
}

/// Damage multiplier against attackers of a given type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weakness {
    pub energy: EnergyType,
    pub multiplier: u32,
}

/// Flat damage reduction against attackers of a given type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resistance {
    pub energy: EnergyType,
    pub reduction: u32,
}

/// One attack printed on a monster card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    /// Required energy symbols. `Colorless` entries accept any energy.
    pub cost: SmallVec<[EnergyType; 4]>,
    /// Base damage to the defending active monster.
    pub damage: u32,
    /// Extra effect resolved after base damage is computed.
    pub effect: Option<Effect>,
}

impl Attack {
    /// Create a free attack with the given base damage.
    #[must_use]
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            cost: SmallVec::new(),
            damage,
            effect: None,
        }
    }

    /// Set the energy cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: impl IntoIterator<Item = EnergyType>) -> Self {
        self.cost = cost.into_iter().collect();
        self
    }

    /// Attach an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// A monster card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterCard {
    pub name: String,
    pub hp: u32,
    pub types: SmallVec<[EnergyType; 2]>,
    pub stage: Stage,
    /// Name of the card this one evolves from. Always set for `Stage1`/`Stage2`.
    pub evolves_from: Option<String>,
    /// Number of attached energies discarded to retreat.
    pub retreat_cost: u32,
    pub weakness: Option<Weakness>,
    pub resistance: Option<Resistance>,
    pub attacks: Vec<Attack>,
}

impl MonsterCard {
    fn with_stage(name: impl Into<String>, hp: u32, stage: Stage, evolves_from: Option<String>) -> Self {
        Self {
            name: name.into(),
            hp,
            types: SmallVec::new(),
            stage,
            evolves_from,
            retreat_cost: 0,
            weakness: None,
            resistance: None,
            attacks: Vec::new(),
        }
    }

    /// Create a Basic monster.
    ///
    /// ```
    /// use rust_tcg::cards::{Attack, EnergyType, MonsterCard};
    ///
    /// let mouse = MonsterCard::basic("Sparkmouse", 60)
    ///     .with_types([EnergyType::Lightning])
    ///     .with_retreat_cost(1)
    ///     .with_attack(Attack::new("Jolt", 20).with_cost([EnergyType::Lightning]));
    ///
    /// assert!(mouse.is_basic());
    /// assert_eq!(mouse.attacks[0].damage, 20);
    /// ```
    #[must_use]
    pub fn basic(name: impl Into<String>, hp: u32) -> Self {
        Self::with_stage(name, hp, Stage::Basic, None)
    }

    /// Create a Stage 1 monster evolving from `evolves_from`.
    #[must_use]
    pub fn stage1(name: impl Into<String>, hp: u32, evolves_from: impl Into<String>) -> Self {
        Self::with_stage(name, hp, Stage::Stage1, Some(evolves_from.into()))
    }

    /// Create a Stage 2 monster evolving from `evolves_from`.
    #[must_use]
    pub fn stage2(name: impl Into<String>, hp: u32, evolves_from: impl Into<String>) -> Self {
        Self::with_stage(name, hp, Stage::Stage2, Some(evolves_from.into()))
    }

    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = EnergyType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_retreat_cost(mut self, cost: u32) -> Self {
        self.retreat_cost = cost;
        self
    }

    #[must_use]
    pub fn with_weakness(mut self, energy: EnergyType, multiplier: u32) -> Self {
        self.weakness = Some(Weakness { energy, multiplier });
        self
    }

    #[must_use]
    pub fn with_resistance(mut self, energy: EnergyType, reduction: u32) -> Self {
        self.resistance = Some(Resistance { energy, reduction });
        self
    }

    #[must_use]
    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }

    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.stage == Stage::Basic
    }

    /// Does this monster have the given type?
    #[must_use]
    pub fn has_type(&self, energy: EnergyType) -> bool {
        self.types.contains(&energy)
    }
}

/// A trainer card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerCard {
    pub name: String,
    pub kind: TrainerKind,
    pub effect: Option<Effect>,
}

impl TrainerCard {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TrainerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            effect: None,
        }
    }

    #[must_use]
    pub fn supporter(name: impl Into<String>) -> Self {
        Self::new(name, TrainerKind::Supporter)
    }

    #[must_use]
    pub fn goods(name: impl Into<String>) -> Self {
        Self::new(name, TrainerKind::Goods)
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// A basic energy card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCard {
    pub name: String,
    pub energy: EnergyType,
}

impl EnergyCard {
    /// Create a basic energy named after its type, e.g. "Fire Energy".
    #[must_use]
    pub fn basic(energy: EnergyType) -> Self {
        Self {
            name: format!("{energy} Energy"),
            energy,
        }
    }
}

/// Any card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Monster(MonsterCard),
    Trainer(TrainerCard),
    Energy(EnergyCard),
}

impl Card {
    /// Card name (for display and evolution matching).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Monster(m) => &m.name,
            Card::Trainer(t) => &t.name,
            Card::Energy(e) => &e.name,
        }
    }

    #[must_use]
    pub fn as_monster(&self) -> Option<&MonsterCard> {
        match self {
            Card::Monster(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        matches!(self, Card::Monster(_))
    }

    #[must_use]
    pub fn is_basic_monster(&self) -> bool {
        matches!(self, Card::Monster(m) if m.is_basic())
    }

    #[must_use]
    pub fn is_energy(&self) -> bool {
        matches!(self, Card::Energy(_))
    }

    /// Trainer sub-kind, if this is a trainer.
    #[must_use]
    pub fn trainer_kind(&self) -> Option<TrainerKind> {
        match self {
            Card::Trainer(t) => Some(t.kind),
            _ => None,
        }
    }

    /// Position in the hand display order:
    /// monsters, supporters, goods, tools, stadiums, energies.
    #[must_use]
    pub fn display_rank(&self) -> u8 {
        match self {
            Card::Monster(_) => 0,
            Card::Trainer(t) => match t.kind {
                TrainerKind::Supporter => 1,
                TrainerKind::Goods => 2,
                TrainerKind::Tool => 3,
                TrainerKind::Stadium => 4,
            },
            Card::Energy(_) => 5,
        }
    }

    /// One-line label for menus.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Card::Monster(m) => format!("[Monster] {} (HP: {})", m.name, m.hp),
            Card::Trainer(t) => {
                let kind = match t.kind {
                    TrainerKind::Supporter => "Supporter",
                    TrainerKind::Goods => "Goods",
                    TrainerKind::Tool => "Tool",
                    TrainerKind::Stadium => "Stadium",
                };
                format!("[{kind}] {}", t.name)
            }
            Card::Energy(e) => format!("[Energy] {}", e.name),
        }
    }
}

impl From<MonsterCard> for Card {
    fn from(card: MonsterCard) -> Self {
        Card::Monster(card)
    }
}

impl From<TrainerCard> for Card {
    fn from(card: TrainerCard) -> Self {
        Card::Trainer(card)
    }
}

impl From<EnergyCard> for Card {
    fn from(card: EnergyCard) -> Self {
        Card::Energy(card)
    }
}
