// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;
use ark_std::vec::Vec;
#[cfg(feature = "std")]
use rayon::prelude::*;

use super::commitment::Commitment;
use crate::util::powers_of;

/// Proof that a polynomial `p` was correctly evaluated at a point `z`
/// producing the evaluated point p(z).
#[derive(Clone, Debug)]
pub struct Proof<P: Pairing> {
    /// This is a commitment to the witness polynomial.
    pub(crate) commitment_to_witness: Commitment<P::G1Affine>,
    /// This is the result of evaluating a polynomial at the point `z`.
    pub(crate) evaluated_point: P::ScalarField,
    /// This is the commitment to the polynomial that you want to prove a
    /// statement about.
    pub(crate) commitment_to_polynomial: Commitment<P::G1Affine>,
}

impl<P: Pairing> Proof<P> {
    pub(crate) fn new(
        commitment_to_witness: Commitment<P::G1Affine>,
        evaluated_point: P::ScalarField,
        commitment_to_polynomial: Commitment<P::G1Affine>,
    ) -> Self {
        Self {
            commitment_to_witness,
            evaluated_point,
            commitment_to_polynomial,
        }
    }
}

/// Proof that multiple polynomials were correctly evaluated at a point `z`,
/// each producing their respective evaluated points p_i(z).
#[derive(Debug)]
pub struct AggregateProof<P: Pairing> {
    /// This is a commitment to the aggregated witness polynomial.
    pub(crate) commitment_to_witness: Commitment<P::G1Affine>,
    /// These are the results of the evaluating each polynomial at the
    /// point `z`.
    pub(crate) evaluated_points: Vec<P::ScalarField>,
    /// These are the commitments to the polynomials which you want to
    /// prove a statement about.
    pub(crate) commitments_to_polynomials: Vec<Commitment<P::G1Affine>>,
}

impl<P: Pairing> AggregateProof<P> {
    /// Initializes an `AggregatedProof` with the commitment to the witness.
    pub(crate) fn with_witness(
        witness: Commitment<P::G1Affine>,
    ) -> AggregateProof<P> {
        AggregateProof {
            commitment_to_witness: witness,
            evaluated_points: Vec::new(),
            commitments_to_polynomials: Vec::new(),
        }
    }

    /// Adds an evaluated point with the commitment to the polynomial which
    /// produced it.
    pub(crate) fn add_part(
        &mut self,
        part: (P::ScalarField, Commitment<P::G1Affine>),
    ) {
        self.evaluated_points.push(part.0);
        self.commitments_to_polynomials.push(part.1);
    }

    /// Flattens an `AggregateProof` into a `Proof` using consecutive powers
    /// of the `v` challenge as the combining coefficients.
    /// The challenge must be the one the prover squeezed after committing
    /// the same parts in the same order.
    pub(crate) fn flatten(&self, v_challenge: &P::ScalarField) -> Proof<P> {
        let powers = powers_of(
            v_challenge,
            self.commitments_to_polynomials.len() - 1,
        );

        #[cfg(not(feature = "std"))]
        let flattened_poly_commitments_iter =
            self.commitments_to_polynomials.iter().zip(powers.iter());
        #[cfg(not(feature = "std"))]
        let flattened_poly_evaluations_iter =
            self.evaluated_points.iter().zip(powers.iter());

        #[cfg(feature = "std")]
        let flattened_poly_commitments_iter = self
            .commitments_to_polynomials
            .par_iter()
            .zip(powers.par_iter());
        #[cfg(feature = "std")]
        let flattened_poly_evaluations_iter =
            self.evaluated_points.par_iter().zip(powers.par_iter());

        // Flattened polynomial commitments using the challenge `v`
        let flattened_poly_commitments: P::G1 =
            flattened_poly_commitments_iter
                .map(|(poly, v_power)| poly.0.into_group() * *v_power)
                .sum();
        // Flattened evaluation points
        let flattened_poly_evaluations: P::ScalarField =
            flattened_poly_evaluations_iter
                .map(|(eval, v_power)| *eval * *v_power)
                .sum();

        Proof {
            commitment_to_witness: self.commitment_to_witness,
            evaluated_point: flattened_poly_evaluations,
            commitment_to_polynomial: Commitment::new(
                flattened_poly_commitments,
            ),
        }
    }
}
