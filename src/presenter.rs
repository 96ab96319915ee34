//! Line-based text reports for pokemon, moves and types.
//!
//! The layout is fixed: a `Name:` header followed by tab-indented fields,
//! with list entries one level deeper. Rendering never fails; missing
//! optional records come out as empty sections.

use crate::dataset::Pokedex;
use schema::{MoveData, Pokemon, PokemonType};

/// Accumulates report lines in display order.
#[derive(Debug, Default)]
struct Report {
    lines: Vec<String>,
}

impl Report {
    fn new(name: &str) -> Self {
        Self {
            lines: vec![format!("{}:", name)],
        }
    }

    fn field(&mut self, label: &str, value: impl std::fmt::Display) -> &mut Self {
        self.lines.push(format!("\t {}: {}", label, value));
        self
    }

    /// A section header; its entries follow on deeper-indented lines.
    fn section(&mut self, label: &str) -> &mut Self {
        self.lines.push(format!("\t {}: ", label));
        self
    }

    fn items<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        for value in values {
            self.lines.push(format!("\t\t {}", value));
        }
        self
    }

    fn labelled_items<I>(&mut self, label: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        for value in values {
            self.lines.push(format!("\t\t {}: {}", label, value));
        }
        self
    }

    /// Type relation entries carry a leading colon in this layout.
    fn relations(&mut self, values: &[String]) -> &mut Self {
        for value in values {
            self.lines.push(format!("\t\t: {}", value));
        }
        self
    }

    fn finish(self) -> Vec<String> {
        self.lines
    }
}

/// Fixed six-decimal format used for every rate and dps value.
pub fn format_rate(value: f64) -> String {
    format!("{:.6}", value)
}

pub fn render_pokemon(pokemon: &Pokemon) -> Vec<String> {
    let mut report = Report::new(&pokemon.name);
    report.field("Type I", pokemon.primary_type());
    if let Some(secondary) = pokemon.secondary_type() {
        report.field("Type II", secondary);
    }
    report
        .field("Height", &pokemon.height)
        .field("Weight", &pokemon.weight)
        .field("Base Attack", pokemon.base_attack)
        .field("Base Defense", pokemon.base_defense)
        .field("Base Stamina", pokemon.base_stamina)
        .field("Buddy Distance Needed", pokemon.buddy_distance_needed)
        .field("Candy Name", &pokemon.candy.name)
        .field("CaptureRate", format_rate(pokemon.capture_rate))
        .section("FastAttackS")
        .items(&pokemon.fast_attacks)
        .field("FleeRate", format_rate(pokemon.flee_rate))
        .section("Weaknesses")
        .items(&pokemon.weaknesses);

    // Always shown, even for pokemon that do not evolve.
    let requirement = pokemon.next_evolution_requirements.clone().unwrap_or_default();
    report
        .section("Next Evolution Requirements")
        .labelled_items("Name", [&requirement.name])
        .labelled_items("Amount", [requirement.amount]);

    if !pokemon.next_evolutions().is_empty() {
        report
            .section("Next Evolutions")
            .labelled_items("Name", pokemon.next_evolutions().iter().map(|step| &step.name));
    }
    if !pokemon.previous_evolutions().is_empty() {
        report
            .section("Previous Evolutions")
            .labelled_items("Name", pokemon.previous_evolutions().iter().map(|step| &step.name));
    }
    report.finish()
}

pub fn render_move(move_data: &MoveData) -> Vec<String> {
    let mut report = Report::new(&move_data.name);
    report
        .field("Type", &move_data.move_type)
        .field("Damage", move_data.damage)
        .field("Duration", move_data.duration)
        .field("Dps", format_rate(move_data.dps))
        .field("Energy", move_data.energy);
    report.finish()
}

/// Type report, including the first few pokemon of this type in the
/// pokedex's current order.
pub fn render_type(pokemon_type: &PokemonType, pokedex: &Pokedex) -> Vec<String> {
    let mut report = Report::new(&pokemon_type.name);
    report
        .section("Effective Against")
        .relations(&pokemon_type.effective_against)
        .section("Weak Against")
        .relations(&pokemon_type.weak_against)
        .section("Example Pokemons")
        .items(
            pokedex
                .example_pokemon(&pokemon_type.name)
                .into_iter()
                .map(|pokemon| &pokemon.name),
        );
    report.finish()
}

/// Join report lines into one transportable block.
pub fn render_block(lines: &[String]) -> String {
    lines.join("\n")
}
