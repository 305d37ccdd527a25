// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Collection of functions needed to verify PLONK proofs.
//!
//! Use this as the only import of your crate if you do not require fine
//! grained control over the verification flow.

pub use crate::commitment_scheme::{
    BatchedOpenings, Commitment, OpeningCheck, OpeningKey, OpeningProof,
    SeparateOpenings,
};
pub use crate::error::Error;
pub use crate::proof_system::{Proof, ProofEvaluations, VerificationKey};
pub use crate::transcript::TranscriptProtocol;
pub use crate::verifier::Verifier;
pub use merlin::Transcript;
