//! Dense row-major matrix/vector kernels.
//!
//! Matrices are flat slices with shape `(rows, cols)`; entry `(r, c)` lives at
//! `r * cols + c`. Bounds are validated by callers.

/// `out = W * x + b`.
#[inline]
pub(crate) fn affine(w: &[f64], rows: usize, cols: usize, x: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(w.len(), rows * cols);
    debug_assert_eq!(x.len(), cols);
    debug_assert_eq!(b.len(), rows);

    let mut out = Vec::with_capacity(rows);
    for r in 0..rows {
        let row = &w[r * cols..(r + 1) * cols];
        let mut acc = b[r];
        for (&wv, &xv) in row.iter().zip(x) {
            acc = wv.mul_add(xv, acc);
        }
        out.push(acc);
    }
    out
}

/// `out = Wᵀ * d`, with `W` of shape `(rows, cols)` and `d` of length `rows`.
#[inline]
pub(crate) fn transpose_mul(w: &[f64], rows: usize, cols: usize, d: &[f64]) -> Vec<f64> {
    debug_assert_eq!(w.len(), rows * cols);
    debug_assert_eq!(d.len(), rows);

    let mut out = vec![0.0; cols];
    for (r, &dv) in d.iter().enumerate() {
        let row = &w[r * cols..(r + 1) * cols];
        for (o, &wv) in out.iter_mut().zip(row) {
            *o = wv.mul_add(dv, *o);
        }
    }
    out
}

/// `W -= lr * (d ⊗ x)`, with `d` of length `rows` and `x` of length `cols`.
#[inline]
pub(crate) fn sub_scaled_outer(w: &mut [f64], cols: usize, lr: f64, d: &[f64], x: &[f64]) {
    debug_assert_eq!(w.len(), d.len() * cols);
    debug_assert_eq!(x.len(), cols);

    for (r, &dv) in d.iter().enumerate() {
        let scale = lr * dv;
        let row = &mut w[r * cols..(r + 1) * cols];
        for (wv, &xv) in row.iter_mut().zip(x) {
            *wv -= scale * xv;
        }
    }
}

/// `v -= lr * d`.
#[inline]
pub(crate) fn sub_scaled(v: &mut [f64], lr: f64, d: &[f64]) {
    debug_assert_eq!(v.len(), d.len());

    for (vv, &dv) in v.iter_mut().zip(d) {
        *vv -= lr * dv;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [[1, 2, 3],
    //  [4, 5, 6]]
    const W: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    #[test]
    fn affine_matches_hand_computation() {
        let out = affine(&W, 2, 3, &[1.0, 0.0, -1.0], &[0.5, -0.5]);
        assert_eq!(out, vec![1.0 - 3.0 + 0.5, 4.0 - 6.0 - 0.5]);
    }

    #[test]
    fn transpose_mul_matches_hand_computation() {
        let out = transpose_mul(&W, 2, 3, &[1.0, 2.0]);
        assert_eq!(out, vec![9.0, 12.0, 15.0]);
    }

    #[test]
    fn outer_update_subtracts_scaled_outer_product() {
        let mut w = W;
        sub_scaled_outer(&mut w, 3, 0.5, &[2.0, -2.0], &[1.0, 0.0, 3.0]);
        assert_eq!(w, [0.0, 2.0, 0.0, 5.0, 5.0, 9.0]);

        let mut b = [1.0, 1.0];
        sub_scaled(&mut b, 0.25, &[4.0, -4.0]);
        assert_eq!(b, [0.0, 2.0]);
    }
}
