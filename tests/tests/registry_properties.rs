//! Property checks over seeded random identifier lists.

use iconset_tests::prelude::*;
use pretty_assertions::assert_eq;
use rand::Rng;

const ROUNDS: u64 = 64;

// ========== TEST: valid_lists_build_in_order ==========
#[test]
fn test_valid_lists_build_in_order() {
    for seed in 0..ROUNDS {
        let mut rng = rng(seed);
        let count = rng.gen_range(0..40);
        let names = random_identifiers(&mut rng, count);
        let units = swatches(count);

        let registry = Registry::from_entries(names.iter().zip(&units)).unwrap();

        let listed: Vec<&str> = registry.list().map(Identifier::as_str).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(listed, expected, "seed {seed}");
    }
}

// ========== TEST: resolve_is_injective ==========
#[test]
fn test_resolve_is_injective() {
    for seed in 0..ROUNDS {
        let mut rng = rng(seed);
        let names = random_identifiers(&mut rng, 24);
        let units = swatches(names.len());
        let registry = Registry::from_entries(names.iter().zip(&units)).unwrap();

        for (i, name) in names.iter().enumerate() {
            let handle = registry.resolve(name).unwrap();
            for (j, unit) in units.iter().enumerate() {
                assert_eq!(handle == Handle::from(unit), i == j, "seed {seed}, {name}");
            }
        }
    }
}

// ========== TEST: unknown_lookups_have_no_effect ==========
#[test]
fn test_unknown_lookups_have_no_effect() {
    for seed in 0..ROUNDS {
        let mut rng = rng(seed);
        let names = random_identifiers(&mut rng, 30);
        let (registered, never) = names.split_at(20);
        let units = swatches(registered.len());
        let registry = Registry::from_entries(registered.iter().zip(&units)).unwrap();
        let before: Vec<Identifier> = registry.list().cloned().collect();

        for name in never {
            assert_eq!(
                registry.resolve(name),
                Err(RegistryError::UnknownIdentifier(name.clone()))
            );
        }

        let after: Vec<Identifier> = registry.list().cloned().collect();
        assert_eq!(before, after);
        for (name, unit) in registered.iter().zip(&units) {
            assert_eq!(registry.resolve(name), Ok(Handle::from(unit)));
        }
    }
}

// ========== TEST: any_duplicate_fails_construction ==========
#[test]
fn test_any_duplicate_fails_construction() {
    for seed in 0..ROUNDS {
        let mut rng = rng(seed);
        let mut names = random_identifiers(&mut rng, 12);
        let source = rng.gen_range(0..names.len());
        let at = rng.gen_range(0..=names.len());
        let dup = names[source].clone();
        names.insert(at, dup.clone());
        let units = swatches(names.len());

        let result = Registry::from_entries(names.iter().zip(&units));

        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateIdentifier(dup),
            "seed {seed}"
        );
    }
}

// ========== TEST: invalid_identifiers_rejected ==========
#[test]
fn test_invalid_identifiers_rejected() {
    let unit = Swatch::new("x");
    for name in invalid_identifiers() {
        let mut builder = RegistryBuilder::new();
        let result = builder.register(name, &unit);
        assert!(
            matches!(result, Err(RegistryError::InvalidIdentifier { ref identifier, .. }) if identifier == name),
            "{name:?} was accepted"
        );
        assert!(builder.build().is_err());
    }
}

// ========== TEST: list_is_idempotent ==========
#[test]
fn test_list_is_idempotent() {
    let mut rng = rng(7);
    let names = random_identifiers(&mut rng, 16);
    let units = swatches(names.len());
    let registry = Registry::from_entries(names.iter().zip(&units)).unwrap();

    let first: Vec<&Identifier> = registry.list().collect();
    for _ in 0..10 {
        let again: Vec<&Identifier> = registry.list().collect();
        assert_eq!(first, again);
    }
}
