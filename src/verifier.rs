// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ark_ec::pairing::Pairing;
use merlin::Transcript;

use crate::commitment_scheme::{
    BatchedOpenings, OpeningCheck, SeparateOpenings,
};
use crate::error::Error;
use crate::proof_system::{Proof, VerificationKey};
use crate::transcript::TranscriptProtocol;

/// Verify proofs of a given circuit.
///
/// Holds the [`VerificationKey`] of the circuit together with the base
/// transcript every verification starts from. The verifier is stateless
/// across calls: each proof is checked against a fresh clone of the base
/// transcript, so a `Verifier` can be reused for any number of proofs.
#[derive(Clone)]
pub struct Verifier<P: Pairing> {
    verification_key: VerificationKey<P>,
    transcript: Transcript,
}

impl<P: Pairing> Verifier<P> {
    /// Creates a new verifier instance for the circuit described by the
    /// verification key.
    pub fn new(verification_key: VerificationKey<P>) -> Self {
        let transcript = <Transcript as TranscriptProtocol<P>>::base(
            b"plonk",
            &verification_key,
        );

        Self {
            verification_key,
            transcript,
        }
    }

    /// The verification key of the circuit this verifier checks proofs
    /// for.
    pub fn verification_key(&self) -> &VerificationKey<P> {
        &self.verification_key
    }

    /// Verify a generated proof, batching both opening proofs into a
    /// single pairing check.
    pub fn verify(
        &self,
        proof: &Proof<P>,
        public_inputs: &[P::ScalarField],
    ) -> bool {
        self.accept::<BatchedOpenings>(proof, public_inputs)
    }

    /// Verify a generated proof checking each opening proof with its own
    /// pairing. Slower than [`Self::verify`] but useful to cross-check the
    /// batched path; both always agree on the verdict.
    pub fn verify_unbatched(
        &self,
        proof: &Proof<P>,
        public_inputs: &[P::ScalarField],
    ) -> bool {
        self.accept::<SeparateOpenings>(proof, public_inputs)
    }

    fn accept<C: OpeningCheck<P>>(
        &self,
        proof: &Proof<P>,
        public_inputs: &[P::ScalarField],
    ) -> bool {
        match self.verify_with::<C>(proof, public_inputs) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = ?e, "proof rejected");
                false
            }
        }
    }

    /// Verify a generated proof with the given opening check strategy,
    /// surfacing the reason a proof is rejected.
    pub fn verify_with<C: OpeningCheck<P>>(
        &self,
        proof: &Proof<P>,
        public_inputs: &[P::ScalarField],
    ) -> Result<(), Error> {
        let n = self.verification_key.group_order() as usize;
        if public_inputs.len() > n {
            return Err(Error::InconsistentPublicInputsLen {
                expected: n,
                provided: public_inputs.len(),
            });
        }

        let mut transcript = self.transcript.clone();

        proof.verify::<C>(
            &self.verification_key,
            &mut transcript,
            public_inputs,
        )
    }
}
