// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;
use ark_ff::One;
use ark_std::vec::Vec;

use crate::commitment_scheme::Commitment;
use crate::proof_system::proof::ProofEvaluations;

/// Commitments to the five gate-selector polynomials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VerifierKey<P: Pairing> {
    pub(crate) q_m: Commitment<P::G1Affine>,
    pub(crate) q_l: Commitment<P::G1Affine>,
    pub(crate) q_r: Commitment<P::G1Affine>,
    pub(crate) q_o: Commitment<P::G1Affine>,
    pub(crate) q_c: Commitment<P::G1Affine>,
}

impl<P: Pairing> VerifierKey<P> {
    /// Pushes the gate-constraint part of the linearization commitment:
    /// the selector commitments scaled by the claimed wire evaluations,
    /// with the public input evaluation folded onto the generator.
    pub(crate) fn linearize(
        &self,
        evaluations: &ProofEvaluations<P::ScalarField>,
        pi_eval: &P::ScalarField,
        scalars: &mut Vec<P::ScalarField>,
        points: &mut Vec<P::G1Affine>,
    ) {
        scalars.push(evaluations.a_eval * evaluations.b_eval);
        points.push(self.q_m.0);

        scalars.push(evaluations.a_eval);
        points.push(self.q_l.0);

        scalars.push(evaluations.b_eval);
        points.push(self.q_r.0);

        scalars.push(evaluations.c_eval);
        points.push(self.q_o.0);

        scalars.push(*pi_eval);
        points.push(P::G1Affine::generator());

        scalars.push(P::ScalarField::one());
        points.push(self.q_c.0);
    }
}
