// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Key module contains the utilities and data structures
//! that support the usage of Opening keys.

use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Zero;

use super::proof::Proof;
use crate::{error::Error, util};

/// Opening Key is used to verify opening proofs made about a committed
/// polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningKey<P: Pairing> {
    /// The generator of G1.
    pub(crate) g: P::G1Affine,
    /// The generator of G2.
    pub(crate) h: P::G2Affine,
    /// \beta times the above generator of G2.
    pub(crate) beta_h: P::G2Affine,
}

impl<P: Pairing> OpeningKey<P> {
    pub(crate) fn new(
        g: P::G1Affine,
        h: P::G2Affine,
        beta_h: P::G2Affine,
    ) -> OpeningKey<P> {
        OpeningKey { g, h, beta_h }
    }

    /// Checks that a polynomial `p` was evaluated at a point `z` and
    /// returned the value specified `v`. ie. v = p(z).
    ///
    /// This is the degree-shift identity
    /// `e(witness, beta_h - z * h) == e(commitment - v * g, h)`.
    pub(crate) fn check(
        &self,
        point: &P::ScalarField,
        proof: &Proof<P>,
    ) -> Result<(), Error> {
        let shifted_beta_h =
            (self.beta_h.into_group() - self.h * *point).into_affine();

        let committed_value = (proof.commitment_to_polynomial.0.into_group()
            - self.g * proof.evaluated_point)
            .into_affine();

        let lhs = P::pairing(proof.commitment_to_witness.0, shifted_beta_h);
        let rhs = P::pairing(committed_value, self.h);

        if lhs != rhs {
            return Err(Error::PairingCheckFailure);
        }
        Ok(())
    }

    /// Checks whether a batch of polynomials evaluated at different points,
    /// returned their specified value.
    ///
    /// Each opening identity is first rearranged so that both sides are
    /// paired against a fixed G2 element,
    /// `e(witness, beta_h) == e(commitment - v * g + z * witness, h)`,
    /// after which all instances are folded with powers of the `u`
    /// challenge and verified with a single multi-pairing.
    pub(crate) fn batch_check(
        &self,
        points: &[P::ScalarField],
        proofs: &[Proof<P>],
        u_challenge: &P::ScalarField,
    ) -> Result<(), Error> {
        let mut total_c = P::G1::zero();
        let mut total_w = P::G1::zero();

        let powers = util::powers_of(u_challenge, proofs.len() - 1);
        // Instead of multiplying g in each turn, we simply accumulate
        // its coefficient and perform a final multiplication at the end.
        let mut g_multiplier = P::ScalarField::zero();

        for ((proof, u_power), point) in
            proofs.iter().zip(powers).zip(points)
        {
            let w = proof.commitment_to_witness.0.into_group();
            let c = proof.commitment_to_polynomial.0.into_group() + w * *point;
            g_multiplier += u_power * proof.evaluated_point;

            total_c += c * u_power;
            total_w += w * u_power;
        }
        total_c -= self.g * g_multiplier;

        let affine_total_w = (-total_w).into_affine();
        let affine_total_c = total_c.into_affine();

        let pairing = P::multi_pairing(
            [affine_total_w, affine_total_c],
            [self.beta_h, self.h],
        );

        if pairing != PairingOutput::<P>::zero() {
            return Err(Error::PairingCheckFailure);
        };
        Ok(())
    }
}
