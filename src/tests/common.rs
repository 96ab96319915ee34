use crate::dataset::Pokedex;
use crate::errors::QueryResult;
use schema::{Candy, Dataset, EvolutionRequirement, EvolutionStep, MoveData, Pokemon, PokemonType};

/// A builder for test pokemon with plain defaults.
///
/// # Example
/// ```
/// let pikachu = TestPokemonBuilder::new("Pikachu", "Electric")
///     .with_stats(112, 101, 70)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    pokemon: Pokemon,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a pokemon with a single primary type.
    pub fn new(name: &str, primary_type: &str) -> Self {
        Self {
            pokemon: Pokemon {
                number: "000".to_string(),
                name: name.to_string(),
                classification: String::new(),
                type_i: vec![primary_type.to_string()],
                type_ii: None,
                weaknesses: Vec::new(),
                fast_attacks: Vec::new(),
                weight: "1.0 kg".to_string(),
                height: "0.5 m".to_string(),
                candy: Candy {
                    name: format!("{} Candy", name),
                    family_id: 1,
                },
                next_evolution_requirements: None,
                next_evolutions: None,
                previous_evolutions: None,
                special_attacks: Vec::new(),
                base_attack: 100,
                base_defense: 100,
                base_stamina: 100,
                capture_rate: 0.2,
                flee_rate: 0.1,
                buddy_distance_needed: 3,
            },
        }
    }

    pub fn with_number(mut self, number: &str) -> Self {
        self.pokemon.number = number.to_string();
        self
    }

    pub fn with_secondary_type(mut self, secondary_type: &str) -> Self {
        self.pokemon.type_ii = Some(vec![secondary_type.to_string()]);
        self
    }

    /// Sets attack, defense and stamina.
    pub fn with_stats(mut self, attack: i32, defense: i32, stamina: i32) -> Self {
        self.pokemon.base_attack = attack;
        self.pokemon.base_defense = defense;
        self.pokemon.base_stamina = stamina;
        self
    }

    pub fn with_fast_attacks(mut self, moves: &[&str]) -> Self {
        self.pokemon.fast_attacks = moves.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_weaknesses(mut self, types: &[&str]) -> Self {
        self.pokemon.weaknesses = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_rates(mut self, capture_rate: f64, flee_rate: f64) -> Self {
        self.pokemon.capture_rate = capture_rate;
        self.pokemon.flee_rate = flee_rate;
        self
    }

    pub fn with_next_evolution(mut self, number: &str, name: &str, candies: i32) -> Self {
        self.pokemon.next_evolution_requirements = Some(EvolutionRequirement {
            amount: candies,
            family: self.pokemon.candy.family_id,
            name: self.pokemon.candy.name.clone(),
        });
        self.pokemon
            .next_evolutions
            .get_or_insert_with(Vec::new)
            .push(EvolutionStep {
                number: number.to_string(),
                name: name.to_string(),
            });
        self
    }

    pub fn with_previous_evolution(mut self, number: &str, name: &str) -> Self {
        self.pokemon
            .previous_evolutions
            .get_or_insert_with(Vec::new)
            .push(EvolutionStep {
                number: number.to_string(),
                name: name.to_string(),
            });
        self
    }

    pub fn build(self) -> Pokemon {
        self.pokemon
    }
}

/// Creates a move with the given stats. The id is derived from the name length
/// and does not matter to any query.
pub fn test_move(name: &str, move_type: &str, damage: i32, energy: i32, dps: f64, duration: i32) -> MoveData {
    MoveData {
        id: name.len() as i32,
        name: name.to_string(),
        move_type: move_type.to_string(),
        damage,
        energy,
        dps,
        duration,
    }
}

/// A builder for small in-memory pokedexes.
#[derive(Default)]
pub struct TestPokedexBuilder {
    dataset: Dataset,
}

impl TestPokedexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(mut self, names: &[&str]) -> Self {
        self.dataset
            .types
            .extend(names.iter().map(|name| PokemonType::new(*name)));
        self
    }

    pub fn with_type(mut self, pokemon_type: PokemonType) -> Self {
        self.dataset.types.push(pokemon_type);
        self
    }

    pub fn with_pokemon(mut self, pokemon: Pokemon) -> Self {
        self.dataset.pokemons.push(pokemon);
        self
    }

    pub fn with_move(mut self, move_data: MoveData) -> Self {
        self.dataset.moves.push(move_data);
        self
    }

    pub fn build(self) -> Pokedex {
        match Pokedex::from_dataset(self.dataset) {
            Ok(pokedex) => pokedex,
            Err(err) => panic!("Failed to build test pokedex: {}", err),
        }
    }
}

/// A small pokedex shared by several test modules: three types, five
/// pokemon and five moves.
pub fn sample_pokedex() -> Pokedex {
    TestPokedexBuilder::new()
        .with_type(PokemonType {
            name: "Fire".to_string(),
            effective_against: vec!["Grass".to_string(), "Ice".to_string()],
            weak_against: vec!["Water".to_string()],
        })
        .with_type(PokemonType {
            name: "Water".to_string(),
            effective_against: vec!["Fire".to_string()],
            weak_against: vec!["Grass".to_string(), "Electric".to_string()],
        })
        .with_type(PokemonType::new("Grass"))
        .with_pokemon(
            TestPokemonBuilder::new("Charmander", "Fire")
                .with_number("004")
                .with_stats(128, 108, 78)
                .build(),
        )
        .with_pokemon(
            TestPokemonBuilder::new("Squirtle", "Water")
                .with_number("007")
                .with_stats(112, 142, 88)
                .build(),
        )
        .with_pokemon(
            TestPokemonBuilder::new("Vulpix", "Fire")
                .with_number("037")
                .with_stats(96, 122, 76)
                .build(),
        )
        .with_pokemon(
            TestPokemonBuilder::new("Charizard", "Fire")
                .with_number("006")
                .with_secondary_type("Flying")
                .with_stats(223, 176, 156)
                .build(),
        )
        .with_pokemon(
            TestPokemonBuilder::new("Ponyta", "fire")
                .with_number("077")
                .with_stats(168, 138, 100)
                .build(),
        )
        .with_move(test_move("Ember", "Fire", 10, 10, 9.523809523809524, 1050))
        .with_move(test_move("Water Gun", "Water", 6, 7, 12.0, 500))
        .with_move(test_move("Flamethrower", "Fire", 55, -50, 18.97, 2900))
        .with_move(test_move("Vine Whip", "Grass", 7, 7, 10.769, 650))
        .with_move(test_move("Fire Blast", "Fire", 100, -100, 24.390243902439025, 4100))
        .build()
}

/// Names of a query result, in order.
pub fn names<T, F>(items: &[&T], name_of: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    items.iter().map(|item| name_of(item).to_string()).collect()
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when queries unexpectedly fail.
pub fn assert_ok<T>(result: QueryResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
