// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Ideally we should cleanly abstract away the polynomial commitment scheme
//! We note that PLONK makes use of the linearization technique
//! conceived in SONIC [Mary Maller].
//!
//! This technique implicitly requires the
//! commitment scheme to be homomorphic. `Merkle Tree like` techniques such as
//! FRI are not homomorphic and therefore for PLONK to be usable with all
//! commitment schemes without modification, one would need to remove the
//! linearizer

pub(crate) mod kzg10;

pub use kzg10::{AggregateProof, Commitment, OpeningKey, OpeningProof};

use ark_ec::pairing::Pairing;

use crate::error::Error;

/// Strategy deciding how the two KZG opening proofs carried by a PLONK
/// proof, one at the evaluation challenge and one at its one-step shift,
/// are checked against the opening key.
///
/// Every strategy must produce the same accept/reject verdict for the same
/// input; they only trade pairing evaluations for extra scalar
/// multiplications.
pub trait OpeningCheck<P: Pairing> {
    /// Check that both openings hold, or report the first failure.
    fn check(
        opening_key: &OpeningKey<P>,
        points: &[P::ScalarField; 2],
        proofs: &[OpeningProof<P>; 2],
        u_challenge: &P::ScalarField,
    ) -> Result<(), Error>;
}

/// Checks each opening with its own pairing equation. Slower, but each
/// equation maps one-to-one onto the KZG opening identity, which makes this
/// the reference the batched strategy is tested against.
pub struct SeparateOpenings;

impl<P: Pairing> OpeningCheck<P> for SeparateOpenings {
    fn check(
        opening_key: &OpeningKey<P>,
        points: &[P::ScalarField; 2],
        proofs: &[OpeningProof<P>; 2],
        _u_challenge: &P::ScalarField,
    ) -> Result<(), Error> {
        for (point, proof) in points.iter().zip(proofs.iter()) {
            opening_key.check(point, proof)?;
        }
        Ok(())
    }
}

/// Compresses both openings into a single pairing by taking a random linear
/// combination of the rearranged opening identities, with the `u` challenge
/// as the combining coefficient.
pub struct BatchedOpenings;

impl<P: Pairing> OpeningCheck<P> for BatchedOpenings {
    fn check(
        opening_key: &OpeningKey<P>,
        points: &[P::ScalarField; 2],
        proofs: &[OpeningProof<P>; 2],
        u_challenge: &P::ScalarField,
    ) -> Result<(), Error> {
        opening_key.batch_check(points, proofs, u_challenge)
    }
}
