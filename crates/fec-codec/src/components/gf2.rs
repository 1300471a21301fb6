//! Linear algebra over GF(2) for small, fixed-size matrices.
//! Matrices hold one bit per byte, row-major.

use fec_core::BitBlock;

/// M×N matrix over GF(2)
pub type Gf2Matrix<const M: usize, const N: usize> = [[u8; N]; M];

/// Matrix-vector product mod 2: `out[row] = XOR over col of (m[row][col] & v[col])`.
/// Loops run over every entry regardless of the data, there is no early exit.
pub fn matvec<const M: usize, const N: usize>(m: &Gf2Matrix<M, N>, v: &BitBlock<N>) -> BitBlock<M> {
    BitBlock::from_fn(|row| {
        m[row]
            .iter()
            .zip(v.as_bitarr())
            .fold(0u8, |acc, (&a, &b)| acc ^ (a & b))
    })
}

/// Transpose, usable in const context
pub const fn transpose<const M: usize, const N: usize>(m: &Gf2Matrix<M, N>) -> Gf2Matrix<N, M> {
    let mut out = [[0u8; M]; N];
    let mut r = 0;
    while r < M {
        let mut c = 0;
        while c < N {
            out[c][r] = m[r][c];
            c += 1;
        }
        r += 1;
    }
    out
}

/// Column `col` of `m` packed into an integer, row 0 as the most significant bit
pub const fn column_value<const M: usize, const N: usize>(m: &Gf2Matrix<M, N>, col: usize) -> usize {
    let mut val = 0usize;
    let mut r = 0;
    while r < M {
        val = (val << 1) | (m[r][col] & 1) as usize;
        r += 1;
    }
    val
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: Gf2Matrix<2, 3> = [
        [1, 0, 1],
        [1, 1, 0],
    ];

    #[test]
    fn test_matvec() {
        let v = BitBlock::<3>::from_bitstr("111").unwrap();
        assert_eq!(matvec(&M, &v).to_bitstr(), "00");

        let v = BitBlock::<3>::from_bitstr("100").unwrap();
        assert_eq!(matvec(&M, &v).to_bitstr(), "11");

        let v = BitBlock::<3>::from_bitstr("011").unwrap();
        assert_eq!(matvec(&M, &v).to_bitstr(), "11");
    }

    #[test]
    fn test_matvec_is_linear() {
        // A(x ^ y) == Ax ^ Ay for all pairs of 3-bit vectors
        for x in 0..8u64 {
            for y in 0..8u64 {
                let vx = BitBlock::<3>::from_u64(x);
                let vy = BitBlock::<3>::from_u64(y);
                assert_eq!(matvec(&M, &vx.xor(&vy)), matvec(&M, &vx).xor(&matvec(&M, &vy)));
            }
        }
    }

    #[test]
    fn test_transpose() {
        const MT: Gf2Matrix<3, 2> = transpose(&M);
        assert_eq!(MT, [[1, 1], [0, 1], [1, 0]]);
        assert_eq!(transpose(&MT), M);
    }

    #[test]
    fn test_column_value() {
        assert_eq!(column_value(&M, 0), 0b11);
        assert_eq!(column_value(&M, 1), 0b01);
        assert_eq!(column_value(&M, 2), 0b10);
    }
}
