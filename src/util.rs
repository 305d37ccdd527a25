// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use ark_ff::Field;
use ark_serialize::CanonicalSerialize;
use ark_std::vec::Vec;

/// Compressed encoding into a fresh buffer; writing into a `Vec` cannot
/// fail.
pub(crate) fn to_bytes<T: CanonicalSerialize>(item: &T) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(item.compressed_size());
    item.serialize_compressed(&mut bytes)
        .expect("serialization into a vector is infallible");
    bytes
}

/// Returns a vector of scalars of increasing powers of x from x^0 to x^d.
pub(crate) fn powers_of<F: Field>(scalar: &F, max_degree: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(max_degree + 1);
    powers.push(F::one());
    for i in 1..=max_degree {
        powers.push(powers[i - 1] * scalar);
    }
    powers
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::Fr as BnScalar;

    #[test]
    fn test_powers_of() {
        let x = BnScalar::from(10u64);
        let degree = 100u64;

        let powers_of_x = powers_of(&x, degree as usize);

        for (i, x_i) in powers_of_x.iter().enumerate() {
            assert_eq!(*x_i, x.pow([i as u64]))
        }

        let last_element = powers_of_x.last().unwrap();
        assert_eq!(*last_element, x.pow([degree]))
    }
}
