#[cfg(test)]
mod tests {
    use crate::presenter::{format_rate, render_block, render_move, render_pokemon, render_type};
    use crate::tests::common::{assert_ok, sample_pokedex, test_move, TestPokedexBuilder, TestPokemonBuilder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{PokemonType, SortKey};

    #[test]
    fn test_render_full_pokemon() {
        let ivysaur = TestPokemonBuilder::new("Ivysaur", "Grass")
            .with_secondary_type("Poison")
            .with_stats(151, 151, 120)
            .with_fast_attacks(&["Razor Leaf", "Vine Whip"])
            .with_weaknesses(&["Fire", "Ice"])
            .with_rates(0.07, 0.07)
            .with_next_evolution("003", "Venusaur", 100)
            .with_previous_evolution("001", "Bulbasaur")
            .build();

        assert_eq!(
            render_pokemon(&ivysaur),
            vec![
                "Ivysaur:",
                "\t Type I: Grass",
                "\t Type II: Poison",
                "\t Height: 0.5 m",
                "\t Weight: 1.0 kg",
                "\t Base Attack: 151",
                "\t Base Defense: 151",
                "\t Base Stamina: 120",
                "\t Buddy Distance Needed: 3",
                "\t Candy Name: Ivysaur Candy",
                "\t CaptureRate: 0.070000",
                "\t FastAttackS: ",
                "\t\t Razor Leaf",
                "\t\t Vine Whip",
                "\t FleeRate: 0.070000",
                "\t Weaknesses: ",
                "\t\t Fire",
                "\t\t Ice",
                "\t Next Evolution Requirements: ",
                "\t\t Name: Ivysaur Candy",
                "\t\t Amount: 100",
                "\t Next Evolutions: ",
                "\t\t Name: Venusaur",
                "\t Previous Evolutions: ",
                "\t\t Name: Bulbasaur",
            ]
        );
    }

    #[test]
    fn test_pokemon_without_secondary_type_has_no_type_ii_line() {
        let pikachu = TestPokemonBuilder::new("Pikachu", "Electric").build();
        let lines = render_pokemon(&pikachu);

        assert!(!lines.iter().any(|line| line.contains("Type II")));
        assert_eq!(lines[1], "\t Type I: Electric");
        assert_eq!(lines[2], "\t Height: 0.5 m");
    }

    #[test]
    fn test_absent_evolution_records_render_as_empty_sections() {
        let tauros = TestPokemonBuilder::new("Tauros", "Normal").build();
        let lines = render_pokemon(&tauros);

        // The requirement block is always present, with blank values.
        assert_eq!(
            &lines[lines.len() - 3..],
            &["\t Next Evolution Requirements: ", "\t\t Name: ", "\t\t Amount: 0"]
        );
        assert!(!lines.iter().any(|line| line.contains("Next Evolutions")));
        assert!(!lines.iter().any(|line| line.contains("Previous Evolutions")));
    }

    #[test]
    fn test_empty_fast_attacks_render_an_empty_section() {
        let ditto = TestPokemonBuilder::new("Ditto", "Normal").build();
        let lines = render_pokemon(&ditto);

        let header = lines
            .iter()
            .position(|line| line == "\t FastAttackS: ")
            .unwrap();
        assert!(lines[header + 1].starts_with("\t FleeRate: "));
    }

    #[rstest]
    #[case(0.0, "0.000000")]
    #[case(0.16, "0.160000")]
    #[case(1.0, "1.000000")]
    #[case(9.523809523809524, "9.523810")]
    fn test_format_rate_uses_six_decimals(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_rate(value), expected);
    }

    #[test]
    fn test_render_move() {
        let ember = test_move("Ember", "Fire", 10, 10, 9.523809523809524, 1050);
        assert_eq!(
            render_move(&ember),
            vec![
                "Ember:",
                "\t Type: Fire",
                "\t Damage: 10",
                "\t Duration: 1050",
                "\t Dps: 9.523810",
                "\t Energy: 10",
            ]
        );
    }

    #[test]
    fn test_render_type_lists_relations_and_three_examples() {
        let pokedex = sample_pokedex();
        let fire = assert_ok(pokedex.get_type_by_name("fire"));

        assert_eq!(
            render_type(fire, &pokedex),
            vec![
                "Fire:",
                "\t Effective Against: ",
                "\t\t: Grass",
                "\t\t: Ice",
                "\t Weak Against: ",
                "\t\t: Water",
                "\t Example Pokemons: ",
                "\t\t Charmander",
                "\t\t Vulpix",
                "\t\t Charizard",
            ]
        );
    }

    #[test]
    fn test_type_examples_follow_current_order() {
        let mut pokedex = sample_pokedex();
        pokedex.sort_by(SortKey::BaseAttack);
        let fire = assert_ok(pokedex.get_type_by_name("Fire")).clone();

        let lines = render_type(&fire, &pokedex);
        assert_eq!(
            &lines[lines.len() - 3..],
            &["\t\t Charizard", "\t\t Ponyta", "\t\t Charmander"]
        );
    }

    #[test]
    fn test_type_with_no_members_has_empty_example_section() {
        let pokedex = TestPokedexBuilder::new()
            .with_type(PokemonType::new("Dragon"))
            .with_pokemon(TestPokemonBuilder::new("Dratini", "Water").build())
            .build();

        let lines = render_type(&pokedex.types()[0], &pokedex);
        assert_eq!(lines.last().map(String::as_str), Some("\t Example Pokemons: "));
    }

    #[test]
    fn test_render_block_joins_lines() {
        let lines = vec!["Ember:".to_string(), "\t Type: Fire".to_string()];
        assert_eq!(render_block(&lines), "Ember:\n\t Type: Fire");
    }
}
