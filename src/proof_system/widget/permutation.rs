// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;
use ark_ff::Field;
use ark_std::vec::Vec;

use crate::commitment_scheme::Commitment;
use crate::proof_system::proof::{Challenges, ProofEvaluations};

/// Commitments to the three permutation polynomials encoding the wire-copy
/// constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VerifierKey<P: Pairing> {
    pub(crate) s_sigma_1: Commitment<P::G1Affine>,
    pub(crate) s_sigma_2: Commitment<P::G1Affine>,
    pub(crate) s_sigma_3: Commitment<P::G1Affine>,
}

impl<P: Pairing> VerifierKey<P> {
    /// Coset multiplier tagging the right-wire column.
    pub(crate) const K1: u64 = 2;
    /// Coset multiplier tagging the output-wire column.
    pub(crate) const K2: u64 = 3;

    /// Pushes the permutation part of the linearization commitment: the
    /// accumulator consistency term (weight `alpha`) together with the
    /// boundary term forcing the accumulator to one at the first domain
    /// point (weight `alpha^2`).
    pub(crate) fn linearize(
        &self,
        challenges: &Challenges<P::ScalarField>,
        l1_eval: &P::ScalarField,
        z_comm: P::G1Affine,
        evaluations: &ProofEvaluations<P::ScalarField>,
        scalars: &mut Vec<P::ScalarField>,
        points: &mut Vec<P::G1Affine>,
    ) {
        let alpha = challenges.alpha;
        let alpha_sq = alpha.square();
        let zeta = challenges.zeta;

        let k1_zeta = P::ScalarField::from(Self::K1) * zeta;
        let k2_zeta = P::ScalarField::from(Self::K2) * zeta;

        // (a_eval + beta * zeta + gamma)(b_eval + beta * k1 * zeta + gamma)
        // (c_eval + beta * k2 * zeta + gamma) * alpha + l1(zeta) * alpha^2
        let x = {
            let q_0 = challenges.rlc(&evaluations.a_eval, &zeta);
            let q_1 = challenges.rlc(&evaluations.b_eval, &k1_zeta);
            let q_2 = challenges.rlc(&evaluations.c_eval, &k2_zeta);

            q_0 * q_1 * q_2 * alpha + *l1_eval * alpha_sq
        };

        scalars.push(x);
        points.push(z_comm);

        // (a_eval + beta * sigma_1_eval + gamma)
        // (b_eval + beta * sigma_2_eval + gamma) * z_shifted_eval * alpha
        let y = {
            let q_0 =
                challenges.rlc(&evaluations.a_eval, &evaluations.s_sigma_1_eval);
            let q_1 =
                challenges.rlc(&evaluations.b_eval, &evaluations.s_sigma_2_eval);

            q_0 * q_1 * evaluations.perm_eval * alpha
        };

        // - y * beta on the last wiring commitment
        scalars.push(-(y * challenges.beta));
        points.push(self.s_sigma_3.0);

        // - y * (c_eval + gamma) closes the wiring product on the
        // generator, and - l1(zeta) * alpha^2 is the generator side of the
        // boundary term
        scalars.push(
            -(y * (evaluations.c_eval + challenges.gamma))
                - *l1_eval * alpha_sq,
        );
        points.push(P::G1Affine::generator());
    }
}
