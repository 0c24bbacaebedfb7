//! Property-based tests for parsing and loading.
//!
//! Uses proptest to generate random forge documents and batch orderings,
//! then verify the determinism and partial-failure invariants hold.

use forgecraft_core::id::Identifier;
use forgecraft_core::recipe::RecipeGenerator;
use forgecraft_core::registry::{BlockRegistry, ControllerRegistry};
use forgecraft_data::document::parse_definition;
use forgecraft_data::loader::Loader;
use proptest::prelude::*;
use serde_json::{Value, json};

const MATERIALS: [&str; 4] = ["stone", "iron_block", "gold_block", "copper_block"];

fn ident(s: &str) -> Identifier {
    s.parse().unwrap()
}

fn block_registry() -> BlockRegistry {
    let mut reg = BlockRegistry::new();
    for name in MATERIALS {
        reg.register(ident(name));
    }
    reg.register(ident("blast_furnace"));
    reg
}

// ===========================================================================
// Generators
// ===========================================================================

/// A random well-formed forge document.
fn arb_valid_doc() -> impl Strategy<Value = Value> {
    (
        1u32..100,
        0.05f32..20.0,
        0u32..1_000_000,
        0..MATERIALS.len(),
        proptest::collection::vec(0..MATERIALS.len(), 0..6),
    )
        .prop_map(|(tier, speed, fuel, material, additional)| {
            let additional: Vec<&str> = additional.iter().map(|&i| MATERIALS[i]).collect();
            json!({
                "tier": tier,
                "speed_multiplier": speed,
                "fuel_capacity": fuel,
                "material": MATERIALS[material],
                "additional_materials": additional,
            })
        })
}

/// A document that must fail to parse, one of the known failure shapes.
fn arb_invalid_doc() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({"material": "stone"})),
        Just(json!({"tier": 1})),
        Just(json!({"tier": 0, "material": "stone"})),
        Just(json!({"tier": 1, "speed_multiplier": 0.0, "material": "stone"})),
        Just(json!({"tier": 1, "material": "unobtainium"})),
    ]
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Parsing the same document twice yields field-for-field identical
    /// definitions.
    #[test]
    fn parse_is_idempotent(doc in arb_valid_doc()) {
        let blocks = block_registry();
        let a = parse_definition(&doc, &blocks).unwrap();
        let b = parse_definition(&doc, &blocks).unwrap();
        prop_assert_eq!(a, b);
    }

    /// The derived smelt time is always trunc(200 / multiplier), never
    /// rounded and never taken from input.
    #[test]
    fn smelt_time_is_truncated_quotient(doc in arb_valid_doc()) {
        let blocks = block_registry();
        let def = parse_definition(&doc, &blocks).unwrap();
        let speed = def.speed_multiplier();
        prop_assert_eq!(def.max_smelt_time(), (200.0f32 / speed).trunc() as u32);
    }

    /// Generating a recipe twice produces byte-identical artifacts.
    #[test]
    fn generation_is_deterministic(doc in arb_valid_doc()) {
        let mut blocks = block_registry();
        let catalyst = blocks.resolve("blast_furnace").unwrap();
        let forge = ident("forgecraft:forge_under_test");
        let mut controllers = ControllerRegistry::new();
        let controller = blocks.register(ident("forgecraft:forge_under_test_controller"));
        controllers.register(forge.clone(), controller);

        let def = parse_definition(&doc, &blocks).unwrap();
        let generator = RecipeGenerator::new(catalyst);
        let a = generator.generate(&forge, &def, &controllers).unwrap();
        let b = generator.generate(&forge, &def, &controllers).unwrap();
        prop_assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }

    /// Every document ends up in exactly one of the report's lists, and the
    /// store holds exactly the successful ones.
    #[test]
    fn report_partitions_the_batch(
        docs in proptest::collection::vec(
            prop_oneof![arb_valid_doc(), arb_invalid_doc()],
            0..12,
        )
    ) {
        let mut blocks = block_registry();
        let catalyst = blocks.resolve("blast_furnace").unwrap();
        let mut controllers = ControllerRegistry::new();

        let docs: Vec<(Identifier, Value)> = docs
            .into_iter()
            .enumerate()
            .map(|(i, doc)| {
                let id = ident(&format!("forgecraft:forge_{i}"));
                let controller = blocks.register(ident(&format!("forgecraft:forge_{i}_controller")));
                controllers.register(id.clone(), controller);
                (id, doc)
            })
            .collect();

        let loader = Loader::new(&blocks, &controllers, RecipeGenerator::new(catalyst));
        let outcome = loader.load_all(&docs);

        prop_assert_eq!(
            outcome.report.successes.len() + outcome.report.failures.len(),
            docs.len()
        );
        prop_assert_eq!(outcome.store.len(), outcome.report.successes.len());
        prop_assert_eq!(outcome.recipes.len(), outcome.report.successes.len());
        for id in &outcome.report.successes {
            prop_assert!(outcome.store.get(id).is_some());
        }
        for (id, _) in &outcome.report.failures {
            prop_assert!(outcome.store.get(id).is_none());
        }
    }
}
