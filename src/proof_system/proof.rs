// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A Proof stores the commitments to all of the elements that
//! are needed to univocally identify a prove of some statement.

use ark_ec::pairing::Pairing;
use ark_ec::VariableBaseMSM;
use ark_ff::{batch_inversion, FftField, Field, One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;
use merlin::Transcript;
#[cfg(feature = "std")]
use rayon::prelude::*;

use crate::commitment_scheme::{
    AggregateProof, Commitment, OpeningCheck, OpeningProof,
};
use crate::error::Error;
use crate::proof_system::VerificationKey;
use crate::transcript::TranscriptProtocol;
use crate::util;

/// A Proof is a composition of `Commitment`s to the witness, permutation,
/// quotient and opening polynomials as well as the `ProofEvaluations`.
///
/// Its main goal is to allow the `Verifier` to formally verify that the
/// secret witnesses used to generate the [`Proof`] satisfy a circuit that
/// the [`Verifier`](crate::verifier::Verifier) holds the verification key
/// of, succinctly and without acquiring any kind of knowledge about the
/// witness used to construct it.
#[derive(Debug, Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<P: Pairing> {
    /// Commitment to the witness polynomial for the left wires.
    pub a_comm: Commitment<P::G1Affine>,
    /// Commitment to the witness polynomial for the right wires.
    pub b_comm: Commitment<P::G1Affine>,
    /// Commitment to the witness polynomial for the output wires.
    pub c_comm: Commitment<P::G1Affine>,

    /// Commitment to the permutation accumulator polynomial.
    pub z_comm: Commitment<P::G1Affine>,

    /// Commitment to the low slice of the quotient polynomial.
    pub t_low_comm: Commitment<P::G1Affine>,
    /// Commitment to the middle slice of the quotient polynomial.
    pub t_mid_comm: Commitment<P::G1Affine>,
    /// Commitment to the high slice of the quotient polynomial.
    pub t_high_comm: Commitment<P::G1Affine>,

    /// Commitment to the opening polynomial at the evaluation challenge.
    pub w_z_comm: Commitment<P::G1Affine>,
    /// Commitment to the opening polynomial at the shifted challenge.
    pub w_z_w_comm: Commitment<P::G1Affine>,

    /// Subset of all of the evaluations added to the proof.
    pub evaluations: ProofEvaluations<P::ScalarField>,
}

/// The evaluations the prover claims for its polynomials at the evaluation
/// challenge, and for the accumulator at the shifted challenge.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    CanonicalSerialize,
    CanonicalDeserialize,
)]
pub struct ProofEvaluations<F: PrimeField> {
    /// Evaluation of the left witness polynomial at the challenge.
    pub a_eval: F,
    /// Evaluation of the right witness polynomial at the challenge.
    pub b_eval: F,
    /// Evaluation of the output witness polynomial at the challenge.
    pub c_eval: F,
    /// Evaluation of the first permutation polynomial at the challenge.
    pub s_sigma_1_eval: F,
    /// Evaluation of the second permutation polynomial at the challenge.
    pub s_sigma_2_eval: F,
    /// Evaluation of the accumulator polynomial at the shifted challenge.
    pub perm_eval: F,
}

/// The challenges of one verification run, squeezed from the transcript in
/// the same five rounds the prover played. Short-lived: built once per call
/// and threaded by reference through every function that consumes them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Challenges<F: Field> {
    pub(crate) beta: F,
    pub(crate) gamma: F,
    pub(crate) alpha: F,
    pub(crate) zeta: F,
    pub(crate) v: F,
    pub(crate) u: F,
}

impl<F: Field> Challenges<F> {
    /// Randomized linear combination binding two terms with the permutation
    /// challenges: `term_1 + term_2 * beta + gamma`.
    pub(crate) fn rlc(&self, term_1: &F, term_2: &F) -> F {
        *term_1 + *term_2 * self.beta + self.gamma
    }
}

impl<P: Pairing> Proof<P> {
    /// Encodes the proof into its compressed byte representation.
    pub fn to_bytes(&self) -> Vec<u8> {
        util::to_bytes(self)
    }

    /// Decodes a proof from its compressed byte representation, validating
    /// that every commitment is a curve point of the right subgroup and
    /// every evaluation a canonical field element.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self::deserialize_compressed(bytes)?)
    }

    /// Performs the verification of a [`Proof`].
    ///
    /// The strategy parameter selects how the final opening checks are
    /// performed; every strategy must agree on the verdict.
    pub(crate) fn verify<C: OpeningCheck<P>>(
        &self,
        verification_key: &VerificationKey<P>,
        transcript: &mut Transcript,
        pub_inputs: &[P::ScalarField],
    ) -> Result<(), Error> {
        let n = verification_key.n;

        // In order for the verifier and prover to have the same view in the
        // non-interactive setting, the verifier simulates the interaction
        // by committing the same elements to the transcript in the same
        // five rounds, squeezing the matching challenges after each round.
        let challenges = self.compute_challenges(transcript);

        // Compute the evaluation of the polynomial vanishing over the whole
        // domain, Z_H(zeta) = zeta^n - 1
        let z_h_eval = challenges.zeta.pow([n]) - P::ScalarField::one();

        // Compute the first Lagrange polynomial evaluated at the challenge
        let l1_eval = compute_first_lagrange_evaluation(
            n,
            &z_h_eval,
            &challenges.zeta,
        )?;

        // Compute the public input polynomial evaluated at the challenge.
        // The negated public inputs are the leading evaluations of a
        // polynomial in the Lagrange basis, zero-padded to the domain size.
        let pi_evaluations: Vec<P::ScalarField> =
            pub_inputs.iter().map(|pi| -*pi).collect();
        let pi_eval = compute_barycentric_eval(
            &pi_evaluations,
            &challenges.zeta,
            n,
            &verification_key.n_inv,
            &verification_key.generator_inv,
        );

        // Reconstruct the commitment to the linearization polynomial the
        // prover used, as a linear combination of existing commitments
        let r_comm = self.compute_linearization_commitment(
            &challenges,
            &z_h_eval,
            &l1_eval,
            &pi_eval,
            verification_key,
        );

        // Aggregate, with powers of the `v` challenge, the opening of the
        // linearization polynomial (which must evaluate to zero at the
        // challenge) with the openings of the wire and wiring polynomials
        let mut aggregate_proof = AggregateProof::with_witness(self.w_z_comm);
        aggregate_proof.add_part((P::ScalarField::zero(), r_comm));
        aggregate_proof.add_part((self.evaluations.a_eval, self.a_comm));
        aggregate_proof.add_part((self.evaluations.b_eval, self.b_comm));
        aggregate_proof.add_part((self.evaluations.c_eval, self.c_comm));
        aggregate_proof.add_part((
            self.evaluations.s_sigma_1_eval,
            verification_key.permutation.s_sigma_1,
        ));
        aggregate_proof.add_part((
            self.evaluations.s_sigma_2_eval,
            verification_key.permutation.s_sigma_2,
        ));
        let flattened_proof = aggregate_proof.flatten(&challenges.v);

        // The accumulator opening at the shifted challenge stands alone
        let shifted_proof = OpeningProof::new(
            self.w_z_w_comm,
            self.evaluations.perm_eval,
            self.z_comm,
        );

        C::check(
            &verification_key.opening_key,
            &[
                challenges.zeta,
                challenges.zeta * verification_key.generator,
            ],
            &[flattened_proof, shifted_proof],
            &challenges.u,
        )
    }

    /// Replays the five proof message rounds through the transcript,
    /// squeezing the challenge scalars the prover derived.
    fn compute_challenges(
        &self,
        transcript: &mut Transcript,
    ) -> Challenges<P::ScalarField> {
        // Round 1: commitments to the wire polynomials
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"a_w",
            &self.a_comm,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"b_w",
            &self.b_comm,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"c_w",
            &self.c_comm,
        );

        let beta = <Transcript as TranscriptProtocol<P>>::challenge_scalar(
            transcript, b"beta",
        );
        <Transcript as TranscriptProtocol<P>>::append_scalar(
            transcript, b"beta", &beta,
        );
        let gamma = <Transcript as TranscriptProtocol<P>>::challenge_scalar(
            transcript, b"gamma",
        );

        // Round 2: commitment to the permutation accumulator
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"z",
            &self.z_comm,
        );
        let alpha = <Transcript as TranscriptProtocol<P>>::challenge_scalar(
            transcript, b"alpha",
        );

        // Round 3: commitments to the slices of the quotient polynomial
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"t_low",
            &self.t_low_comm,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"t_mid",
            &self.t_mid_comm,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"t_high",
            &self.t_high_comm,
        );
        let zeta = <Transcript as TranscriptProtocol<P>>::challenge_scalar(
            transcript,
            b"z_challenge",
        );

        // Round 4: the claimed evaluations
        <Transcript as TranscriptProtocol<P>>::append_scalar(
            transcript,
            b"a_eval",
            &self.evaluations.a_eval,
        );
        <Transcript as TranscriptProtocol<P>>::append_scalar(
            transcript,
            b"b_eval",
            &self.evaluations.b_eval,
        );
        <Transcript as TranscriptProtocol<P>>::append_scalar(
            transcript,
            b"c_eval",
            &self.evaluations.c_eval,
        );
        <Transcript as TranscriptProtocol<P>>::append_scalar(
            transcript,
            b"s_sigma_1_eval",
            &self.evaluations.s_sigma_1_eval,
        );
        <Transcript as TranscriptProtocol<P>>::append_scalar(
            transcript,
            b"s_sigma_2_eval",
            &self.evaluations.s_sigma_2_eval,
        );
        <Transcript as TranscriptProtocol<P>>::append_scalar(
            transcript,
            b"perm_eval",
            &self.evaluations.perm_eval,
        );
        let v = <Transcript as TranscriptProtocol<P>>::challenge_scalar(
            transcript,
            b"v_challenge",
        );

        // Round 5: commitments to the opening proofs
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"w_z",
            &self.w_z_comm,
        );
        <Transcript as TranscriptProtocol<P>>::append_commitment(
            transcript,
            b"w_z_w",
            &self.w_z_w_comm,
        );
        let u = <Transcript as TranscriptProtocol<P>>::challenge_scalar(
            transcript, b"batch",
        );

        Challenges {
            beta,
            gamma,
            alpha,
            zeta,
            v,
            u,
        }
    }

    // Commitment to [r]_1, the linearization polynomial
    fn compute_linearization_commitment(
        &self,
        challenges: &Challenges<P::ScalarField>,
        z_h_eval: &P::ScalarField,
        l1_eval: &P::ScalarField,
        pi_eval: &P::ScalarField,
        verification_key: &VerificationKey<P>,
    ) -> Commitment<P::G1Affine> {
        let mut scalars = Vec::with_capacity(10);
        let mut points = Vec::with_capacity(10);

        verification_key.arithmetic.linearize(
            &self.evaluations,
            pi_eval,
            &mut scalars,
            &mut points,
        );

        verification_key.permutation.linearize(
            challenges,
            l1_eval,
            self.z_comm.0,
            &self.evaluations,
            &mut scalars,
            &mut points,
        );

        // Correct by the recombined quotient, weighted by -Z_H(zeta)
        let t_comm =
            self.compute_quotient_commitment(&challenges.zeta, verification_key.n);
        scalars.push(-*z_h_eval);
        points.push(t_comm.0);

        Commitment::new(P::G1::msm_unchecked(&points, &scalars))
    }

    // The quotient was committed in three degree-bounded slices; recombine
    // them at the challenge as t_low + t_mid * zeta^n + t_high * zeta^2n
    fn compute_quotient_commitment(
        &self,
        zeta: &P::ScalarField,
        n: u64,
    ) -> Commitment<P::G1Affine> {
        let zeta_n = zeta.pow([n]);
        let zeta_two_n = zeta.pow([2 * n]);
        let t_comm = self.t_low_comm.0
            + self.t_mid_comm.0 * zeta_n
            + self.t_high_comm.0 * zeta_two_n;
        Commitment::new(t_comm)
    }
}

/// L_1(zeta) = Z_H(zeta) / (n * (zeta - 1)), the first Lagrange polynomial
/// of the domain evaluated at the challenge.
///
/// The challenge is squeezed from a hash, so it only lands on the domain
/// point `1` with negligible probability; if it does, the proof is rejected
/// rather than the division attempted.
fn compute_first_lagrange_evaluation<F: PrimeField>(
    n: u64,
    z_h_eval: &F,
    zeta: &F,
) -> Result<F, Error> {
    let n_fr = F::from(n);
    let denom = n_fr * (*zeta - F::one());
    denom
        .inverse()
        .map(|denom_inv| *z_h_eval * denom_inv)
        .ok_or(Error::ProofVerificationError)
}

fn compute_barycentric_eval<F: FftField + PrimeField>(
    evaluations: &[F],
    point: &F,
    n: u64,
    n_inv: &F,
    generator_inv: &F,
) -> F {
    let numerator = (point.pow([n]) - F::one()) * n_inv;

    // Indices with non-zero evaluations
    #[cfg(not(feature = "std"))]
    let range = 0..evaluations.len();

    #[cfg(feature = "std")]
    let range = (0..evaluations.len()).into_par_iter();

    let non_zero_evaluations: Vec<usize> = range
        .filter(|&i| {
            let evaluation = &evaluations[i];
            evaluation != &F::zero()
        })
        .collect();

    // Only compute the denominators with non-zero evaluations
    #[cfg(not(feature = "std"))]
    let range = 0..non_zero_evaluations.len();

    #[cfg(feature = "std")]
    let range = (0..non_zero_evaluations.len()).into_par_iter();

    let mut denominators: Vec<F> = range
        .clone()
        .map(|i| {
            // index of non-zero evaluation
            let index = non_zero_evaluations[i];

            (generator_inv.pow([index as u64]) * point) - F::one()
        })
        .collect();
    batch_inversion(&mut denominators);

    let result: F = range
        .map(|i| {
            let eval_index = non_zero_evaluations[i];
            let eval = evaluations[eval_index];

            denominators[i] * eval
        })
        .sum();

    result * numerator
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::Fr as BnScalar;
    use ark_poly::univariate::DensePolynomial;
    use ark_poly::{
        EvaluationDomain, Evaluations, Polynomial, Radix2EvaluationDomain,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use ark_std::UniformRand;

    #[test]
    fn barycentric_eval_matches_interpolation() {
        let mut rng = StdRng::seed_from_u64(0xdec0de);
        let n = 8u64;
        let domain =
            Radix2EvaluationDomain::<BnScalar>::new(n as usize).unwrap();

        // A short evaluation vector, implicitly zero-padded to the domain
        let evals = vec![
            BnScalar::rand(&mut rng),
            BnScalar::zero(),
            BnScalar::rand(&mut rng),
        ];
        let mut padded = evals.clone();
        padded.resize(n as usize, BnScalar::zero());

        let poly: DensePolynomial<BnScalar> =
            Evaluations::from_vec_and_domain(padded, domain).interpolate();

        let point = BnScalar::rand(&mut rng);
        let n_inv = BnScalar::from(n).inverse().unwrap();
        let generator_inv = domain.group_gen().inverse().unwrap();

        let direct = poly.evaluate(&point);
        let barycentric = compute_barycentric_eval(
            &evals,
            &point,
            n,
            &n_inv,
            &generator_inv,
        );

        assert_eq!(direct, barycentric);
    }

    #[test]
    fn barycentric_eval_of_zero_vector_is_zero() {
        let n = 4u64;
        let n_inv = BnScalar::from(n).inverse().unwrap();
        let generator = BnScalar::get_root_of_unity(n).unwrap();
        let generator_inv = generator.inverse().unwrap();

        let eval = compute_barycentric_eval(
            &[],
            &BnScalar::from(99u64),
            n,
            &n_inv,
            &generator_inv,
        );
        assert_eq!(eval, BnScalar::zero());
    }

    #[test]
    fn first_lagrange_evaluation_matches_definition() {
        let mut rng = StdRng::seed_from_u64(0xca11);
        let n = 8u64;
        let domain =
            Radix2EvaluationDomain::<BnScalar>::new(n as usize).unwrap();

        let mut l1_evals = vec![BnScalar::zero(); n as usize];
        l1_evals[0] = BnScalar::one();
        let l1_poly: DensePolynomial<BnScalar> =
            Evaluations::from_vec_and_domain(l1_evals, domain).interpolate();

        let zeta = BnScalar::rand(&mut rng);
        let z_h_eval = zeta.pow([n]) - BnScalar::one();

        let eval = compute_first_lagrange_evaluation(n, &z_h_eval, &zeta)
            .expect("challenge is not in the domain");
        assert_eq!(eval, l1_poly.evaluate(&zeta));
    }

    #[test]
    fn first_lagrange_evaluation_rejects_domain_point() {
        let zeta = BnScalar::one();
        let z_h_eval = BnScalar::zero();
        assert_eq!(
            compute_first_lagrange_evaluation(4, &z_h_eval, &zeta),
            Err(Error::ProofVerificationError)
        );
    }

    #[test]
    fn rlc_combines_terms() {
        let challenges = Challenges {
            beta: BnScalar::from(5u64),
            gamma: BnScalar::from(7u64),
            alpha: BnScalar::zero(),
            zeta: BnScalar::zero(),
            v: BnScalar::zero(),
            u: BnScalar::zero(),
        };
        assert_eq!(
            challenges.rlc(&BnScalar::from(2u64), &BnScalar::from(3u64)),
            BnScalar::from(2 + 3 * 5 + 7u64)
        );
    }
}
