// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! This is an extension over the [Merlin Transcript](Transcript)
//! which adds a few extra functionalities.

use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use merlin::Transcript;

use crate::commitment_scheme::Commitment;
use crate::proof_system::VerificationKey;
use crate::util::to_bytes;

/// Transcript adds an abstraction over the Merlin transcript
/// For convenience
pub trait TranscriptProtocol<P: Pairing> {
    /// Append a `commitment` with the given `label`.
    fn append_commitment(
        &mut self,
        label: &'static [u8],
        comm: &Commitment<P::G1Affine>,
    );

    /// Append a scalar with the given `label`.
    fn append_scalar(&mut self, label: &'static [u8], s: &P::ScalarField);

    /// Compute a `label`ed challenge variable.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> P::ScalarField;

    /// Append domain separator for the circuit size.
    fn circuit_domain_sep(&mut self, n: u64);

    /// Create a new instance of the base transcript of the protocol,
    /// seeded with the fixed commitments of the verification key so
    /// challenges cannot be replayed across circuits.
    fn base(
        label: &'static [u8],
        verification_key: &VerificationKey<P>,
    ) -> Self;
}

impl<P: Pairing> TranscriptProtocol<P> for Transcript {
    fn append_commitment(
        &mut self,
        label: &'static [u8],
        comm: &Commitment<P::G1Affine>,
    ) {
        self.append_message(label, &to_bytes(&comm.0));
    }

    fn append_scalar(&mut self, label: &'static [u8], s: &P::ScalarField) {
        self.append_message(label, &to_bytes(s))
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> P::ScalarField {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);

        P::ScalarField::from_le_bytes_mod_order(&buf)
    }

    fn circuit_domain_sep(&mut self, n: u64) {
        self.append_message(b"dom-sep", b"circuit_size");
        self.append_u64(b"n", n);
    }

    fn base(
        label: &'static [u8],
        verification_key: &VerificationKey<P>,
    ) -> Self {
        let mut transcript = Transcript::new(label);

        <Transcript as TranscriptProtocol<P>>::circuit_domain_sep(
            &mut transcript,
            verification_key.group_order(),
        );

        verification_key.seed_transcript(&mut transcript);

        transcript
    }
}
