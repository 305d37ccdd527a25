// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Errors that a verification run can surface.
//!
//! None of these are fatal: the caller-facing boolean entry points map every
//! variant to a `false` verdict, since proofs routinely come from untrusted
//! sources.

use ark_serialize::SerializationError;

/// Defines all possible verification errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The circuit size must be a power of two so the evaluation domain
    /// admits an FFT and Lagrange interpolation.
    #[error("circuit size {0} is not a supported power of two")]
    InvalidCircuitSize(u64),
    /// More public inputs were provided than the evaluation domain can hold.
    #[error("expected at most {expected} public inputs, provided {provided}")]
    InconsistentPublicInputsLen {
        /// Maximum number of public inputs the circuit supports.
        expected: usize,
        /// Number of public inputs provided.
        provided: usize,
    },
    /// The proof bytes do not decode to valid curve points and field
    /// elements.
    #[error("proof encoding is malformed")]
    InvalidProofEncoding,
    /// A pairing equation did not balance.
    #[error("pairing check failed")]
    PairingCheckFailure,
    /// The proof is inconsistent with the verification key and public
    /// inputs.
    #[error("proof verification failed")]
    ProofVerificationError,
}

impl From<SerializationError> for Error {
    fn from(_: SerializationError) -> Self {
        Self::InvalidProofEncoding
    }
}
