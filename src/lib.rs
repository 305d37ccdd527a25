// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Verifier side of the PLONK permutation argument over arkworks
//! pairing-friendly curves, with KZG10 polynomial commitments as the
//! underlying commitment scheme.
//!
//! The crate checks proofs produced for a circuit compiled to the standard
//! PLONK arithmetization: five gate selectors, three wire columns and a
//! permutation argument encoding the wire-copy constraints. Fiat-Shamir
//! challenges are derived with a [Merlin](https://merlin.cool) transcript,
//! so a proof is only accepted for the exact circuit, public inputs and
//! commitment order it was produced for.
//!
//! ## Example
//!
//! ```ignore
//! use plonk_verifier::prelude::*;
//!
//! let verifier: Verifier<Bn254> = Verifier::new(verification_key);
//! assert!(verifier.verify(&proof, &public_inputs));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

mod commitment_scheme;
mod error;
mod proof_system;
mod util;
mod verifier;

pub mod prelude;
pub mod transcript;

pub use commitment_scheme::{
    BatchedOpenings, Commitment, OpeningCheck, OpeningKey, OpeningProof,
    SeparateOpenings,
};
pub use error::Error;
pub use proof_system::{Proof, ProofEvaluations, VerificationKey};
pub use verifier::Verifier;
