// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use brine_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::algorithm::HashAlgorithm;
use crate::combination::Combination;
use crate::error::RealizeError;
use crate::helpers::{
    create_hash, create_hash_from_secret, create_hash_from_secret_with, create_hash_with, matches,
    matches_constant_time, matches_constant_time_with, matches_with,
};
use crate::salt::Salt;
use crate::traits::Realize;

// =============================================================================
// create_hash()
// =============================================================================

#[test]
fn test_create_hash_forwards_to_realize() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x33));
    let salt = Salt::new(HashAlgorithm::Md5, 16, "mypassword");

    assert_eq!(
        create_hash_with(&salt, &entropy).expect("Failed to create_hash_with(..)"),
        salt.realize_with(&entropy).expect("Failed to realize_with(..)")
    );
}

#[test]
fn test_create_hash_accepts_both_entities() {
    let salt = Salt::new(HashAlgorithm::Sha256, 8, "mypassword");
    let combination = Combination::with_salt(HashAlgorithm::Md5, "mypassword", "@#!s_&");

    assert_eq!(create_hash(&salt).expect("Failed to create_hash(salt)").len(), 40);
    assert_eq!(
        create_hash(&combination)
            .expect("Failed to create_hash(combination)")
            .len(),
        16
    );
}

#[test]
fn test_create_hash_through_reference() {
    let combination = Combination::with_salt(HashAlgorithm::Sha1, "mypassword", "@#!s_&");
    let by_ref = &combination;

    assert_eq!(
        create_hash(&by_ref).expect("Failed to create_hash(..)"),
        combination.realize().expect("Failed to realize()")
    );
}

#[test]
fn test_create_hash_over_mixed_trait_objects() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x10));
    let entities: Vec<Box<dyn Realize>> = vec![
        Box::new(Salt::new(HashAlgorithm::Sha1, 16, "mypassword")),
        Box::new(Combination::new(HashAlgorithm::Md5, "mypassword")),
        Box::new(Combination::with_salt(HashAlgorithm::Sha256, "x", "y")),
    ];

    let lengths: Vec<usize> = entities
        .iter()
        .map(|entity| {
            create_hash_with(entity.as_ref(), &entropy)
                .expect("Failed to create_hash_with(..)")
                .len()
        })
        .collect();

    assert_eq!(lengths, [36, 16, 32]);
    assert_eq!(entropy.call_count(), 2);
}

// =============================================================================
// create_hash_from_secret()
// =============================================================================

#[test]
fn test_create_hash_from_secret_length_and_freshness() {
    let first = create_hash_from_secret("hunter2").expect("Failed to create_hash_from_secret (#0)");
    let second =
        create_hash_from_secret("hunter2").expect("Failed to create_hash_from_secret (#1)");

    assert_eq!(first.len(), 20);
    assert_eq!(second.len(), 20);
    assert_ne!(first, second);
}

#[test]
fn test_create_hash_from_secret_is_sha1_unsalted_combination() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x77));

    let from_secret = create_hash_from_secret_with(&entropy, "hunter2")
        .expect("Failed to create_hash_from_secret_with(..)");
    let unsalted = Combination::new(HashAlgorithm::Sha1, "hunter2")
        .realize_with(&entropy)
        .expect("Failed to realize_with(..)");

    assert_eq!(from_secret, unsalted);
}

#[test]
fn test_create_hash_from_secret_propagates_entropy_error() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    let result = create_hash_from_secret_with(&entropy, "hunter2");

    assert!(matches!(result, Err(RealizeError::EntropyUnavailable(_))));
}

// =============================================================================
// matches()
// =============================================================================

#[test]
fn test_matches_same_parameters() {
    let stored = Combination::with_salt(HashAlgorithm::Sha1, "mypassword", "@#!s_&");
    let attempt = Combination::with_salt(HashAlgorithm::Sha1, "mypassword", "@#!s_&");

    assert!(matches(&stored, &attempt).expect("Failed to matches(..)"));
    assert!(matches_constant_time(&stored, &attempt).expect("Failed to matches_constant_time(..)"));
}

#[test]
fn test_matches_wrong_secret() {
    let stored = Combination::with_salt(HashAlgorithm::Sha1, "mypassword", "@#!s_&");
    let attempt = Combination::with_salt(HashAlgorithm::Sha1, "badPassWord", "@#!s_&");

    assert!(!matches(&stored, &attempt).expect("Failed to matches(..)"));
    assert!(
        !matches_constant_time(&stored, &attempt).expect("Failed to matches_constant_time(..)")
    );
}

#[test]
fn test_matches_different_lengths() {
    let md5 = Combination::with_salt(HashAlgorithm::Md5, "mypassword", "@#!s_&");
    let sha256 = Combination::with_salt(HashAlgorithm::Sha256, "mypassword", "@#!s_&");

    assert!(!matches(&md5, &sha256).expect("Failed to matches(..)"));
    assert!(!matches_constant_time(&md5, &sha256).expect("Failed to matches_constant_time(..)"));
}

#[test]
fn test_matches_salt_against_itself_is_false() {
    let salt = Salt::new(HashAlgorithm::Sha1, 16, "mypassword");

    assert!(!matches(&salt, &salt).expect("Failed to matches(..)"));
}

#[test]
fn test_matches_unsalted_against_itself_is_false() {
    let combination = Combination::new(HashAlgorithm::Sha1, "mypassword");

    assert!(!matches(&combination, &combination).expect("Failed to matches(..)"));
}

#[test]
fn test_matches_realizes_each_side_once() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x00));
    let a = Salt::new(HashAlgorithm::Sha1, 16, "mypassword");
    let b = Combination::new(HashAlgorithm::Sha1, "mypassword");

    matches_with(&a, &b, &entropy).expect("Failed to matches_with(..)");

    assert_eq!(entropy.call_count(), 2);
}

#[test]
fn test_matches_mixed_entities() {
    // A fixed source makes the default salt reproducible
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x9C));
    let unsalted = Combination::new(HashAlgorithm::Sha256, "mypassword");
    let salted = Combination::with_salt(
        HashAlgorithm::Sha256,
        "mypassword",
        Salt::new(HashAlgorithm::Sha1, 16, "mypassword")
            .realize_with(&entropy)
            .expect("Failed to realize_with(..)"),
    );

    assert!(matches_with(&unsalted, &salted, &entropy).expect("Failed to matches_with(..)"));
    assert!(
        matches_constant_time_with(&unsalted, &salted, &entropy)
            .expect("Failed to matches_constant_time_with(..)")
    );
}

#[test]
fn test_matches_dyn_entities() {
    let stored: Box<dyn Realize> = Box::new(Combination::with_salt(
        HashAlgorithm::Sha1,
        "mypassword",
        "@#!s_&",
    ));
    let attempt: &dyn Realize = &Combination::with_salt(HashAlgorithm::Sha1, "mypassword", "@#!s_&");

    assert!(matches(stored.as_ref(), attempt).expect("Failed to matches(..)"));
    assert!(matches_constant_time(&stored, &attempt).expect("Failed to matches_constant_time(..)"));
}

#[test]
fn test_matches_propagates_entropy_error() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailOnCall(2));
    let a = Salt::new(HashAlgorithm::Sha1, 16, "mypassword");
    let b = Salt::new(HashAlgorithm::Sha1, 16, "mypassword");

    let result = matches_with(&a, &b, &entropy);

    assert!(matches!(result, Err(RealizeError::EntropyUnavailable(_))));
}

#[test]
fn test_matches_constant_time_propagates_entropy_error() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let a = Combination::new(HashAlgorithm::Md5, "mypassword");
    let b = Combination::with_salt(HashAlgorithm::Md5, "mypassword", "@#!s_&");

    let result = matches_constant_time_with(&a, &b, &entropy);

    assert!(matches!(result, Err(RealizeError::EntropyUnavailable(_))));
}
