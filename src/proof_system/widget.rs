// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

pub(crate) mod arithmetic;
pub(crate) mod permutation;

use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;
use ark_ff::{FftField, Field};
use merlin::Transcript;

use crate::commitment_scheme::{Commitment, OpeningKey};
use crate::error::Error;
use crate::transcript::TranscriptProtocol;

/// PLONK circuit Verification Key.
///
/// Holds the commitments to the fixed polynomials of one circuit together
/// with the evaluation-domain scalars derived from the circuit size. Built
/// once at circuit-compile time and never mutated afterwards, so a single
/// key can serve concurrent verifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationKey<P: Pairing> {
    /// Circuit size, padded to a power of two
    pub(crate) n: u64,
    /// Inverse of the circuit size in the scalar field
    pub(crate) n_inv: P::ScalarField,
    /// The `n`-th root of unity generating the evaluation domain
    pub(crate) generator: P::ScalarField,
    /// Inverse of the domain generator
    pub(crate) generator_inv: P::ScalarField,
    /// VerificationKey for the arithmetic gate
    pub(crate) arithmetic: arithmetic::VerifierKey<P>,
    /// VerificationKey for the permutation argument
    pub(crate) permutation: permutation::VerifierKey<P>,
    /// Key for the degree-shift pairing check of opening proofs
    pub(crate) opening_key: OpeningKey<P>,
}

impl<P: Pairing> VerificationKey<P> {
    /// Constructs a verification key from the commitments produced at
    /// circuit-compile time.
    ///
    /// `n` is the constraint count rounded up to a power of two and `x_2`
    /// is the SRS secret multiplied into the G2 generator.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n: u64,
        q_m: Commitment<P::G1Affine>,
        q_l: Commitment<P::G1Affine>,
        q_r: Commitment<P::G1Affine>,
        q_o: Commitment<P::G1Affine>,
        q_c: Commitment<P::G1Affine>,
        s_sigma_1: Commitment<P::G1Affine>,
        s_sigma_2: Commitment<P::G1Affine>,
        s_sigma_3: Commitment<P::G1Affine>,
        x_2: P::G2Affine,
    ) -> Result<Self, Error> {
        if n == 0 || !n.is_power_of_two() {
            return Err(Error::InvalidCircuitSize(n));
        }

        let generator = P::ScalarField::get_root_of_unity(n)
            .ok_or(Error::InvalidCircuitSize(n))?;
        let generator_inv =
            generator.inverse().ok_or(Error::InvalidCircuitSize(n))?;
        let n_inv = P::ScalarField::from(n)
            .inverse()
            .ok_or(Error::InvalidCircuitSize(n))?;

        let opening_key = OpeningKey::new(
            P::G1Affine::generator(),
            P::G2Affine::generator(),
            x_2,
        );

        Ok(Self {
            n,
            n_inv,
            generator,
            generator_inv,
            arithmetic: arithmetic::VerifierKey {
                q_m,
                q_l,
                q_r,
                q_o,
                q_c,
            },
            permutation: permutation::VerifierKey {
                s_sigma_1,
                s_sigma_2,
                s_sigma_3,
            },
            opening_key,
        })
    }

    /// Size of the evaluation domain the circuit was compiled over.
    pub fn group_order(&self) -> u64 {
        self.n
    }

    /// The root of unity generating the evaluation domain.
    pub fn domain_generator(&self) -> P::ScalarField {
        self.generator
    }

    /// Adds the commitments of the fixed polynomials to the transcript, so
    /// every challenge is bound to the circuit being proven.
    pub(crate) fn seed_transcript(&self, transcript: &mut Transcript) {
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"q_m",
            &self.arithmetic.q_m,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"q_l",
            &self.arithmetic.q_l,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"q_r",
            &self.arithmetic.q_r,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"q_o",
            &self.arithmetic.q_o,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"q_c",
            &self.arithmetic.q_c,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"s_sigma_1",
            &self.permutation.s_sigma_1,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"s_sigma_2",
            &self.permutation.s_sigma_2,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"s_sigma_3",
            &self.permutation.s_sigma_3,
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::{Bn254, Fr as BnScalar, G1Affine, G2Affine};

    fn dummy_commitment() -> Commitment<G1Affine> {
        Commitment::from(G1Affine::generator())
    }

    fn key_of_size(n: u64) -> Result<VerificationKey<Bn254>, Error> {
        let c = dummy_commitment();
        VerificationKey::new(
            n,
            c,
            c,
            c,
            c,
            c,
            c,
            c,
            c,
            G2Affine::generator(),
        )
    }

    #[test]
    fn rejects_non_power_of_two_sizes() {
        assert_eq!(key_of_size(0), Err(Error::InvalidCircuitSize(0)));
        assert_eq!(key_of_size(3), Err(Error::InvalidCircuitSize(3)));
        assert_eq!(key_of_size(12), Err(Error::InvalidCircuitSize(12)));
    }

    #[test]
    fn derives_domain_scalars() {
        let key = key_of_size(8).expect("power of two size");

        assert_eq!(key.group_order(), 8);
        // The generator has exact order n.
        assert_eq!(key.generator.pow([8]), BnScalar::from(1u64));
        assert_ne!(key.generator.pow([4]), BnScalar::from(1u64));
        assert_eq!(key.generator * key.generator_inv, BnScalar::from(1u64));
        assert_eq!(key.n_inv * BnScalar::from(8u64), BnScalar::from(1u64));
    }

    #[test]
    fn single_constraint_domain() {
        let key = key_of_size(1).expect("one is a power of two");
        assert_eq!(key.generator, BnScalar::from(1u64));
    }
}
