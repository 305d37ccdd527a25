// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// Holds a commitment to a polynomial in a form amenable to performing
/// linear combinations of commitments.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Default,
    CanonicalSerialize,
    CanonicalDeserialize,
)]
pub struct Commitment<A: AffineRepr>(
    /// The commitment is a group element.
    pub A,
);

impl<A: AffineRepr> Commitment<A> {
    /// Builds a `Commitment` from a curve point in projective form.
    pub fn new(point: A::Group) -> Self {
        Self(point.into_affine())
    }
}

impl<A: AffineRepr> From<A> for Commitment<A> {
    fn from(point: A) -> Self {
        Self(point)
    }
}
