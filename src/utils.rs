//! Assorted helpers shared by the engine and its builder.

/// Checkpoint spacing for a scan over `num_layers` layers.
///
/// ⌈√T⌉ balances the number of stored checkpoints against the length of the
/// block replayed during backtracking.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        return 1;
    }
    let mut b = (num_layers as f64).sqrt() as usize;
    // correct for float rounding on large inputs
    while b * b < num_layers {
        b += 1;
    }
    while b > 1 && (b - 1) * (b - 1) >= num_layers {
        b -= 1;
    }
    b
}

/// Number of blocks of size `block_size` needed to cover `num_layers` layers.
#[inline]
pub fn block_count(num_layers: usize, block_size: usize) -> usize {
    if num_layers == 0 {
        0
    } else {
        num_layers.div_ceil(block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::{block_count, default_block_size};

    #[test]
    fn tiny_scans_use_unit_blocks() {
        assert_eq!(default_block_size(0), 1);
        assert_eq!(default_block_size(1), 1);
    }

    #[test]
    fn rounds_square_root_up() {
        assert_eq!(default_block_size(2), 2);
        assert_eq!(default_block_size(9), 3);
        assert_eq!(default_block_size(10), 4);
        assert_eq!(default_block_size(1_000_000), 1_000);
        assert_eq!(default_block_size(1_000_001), 1_001);
    }

    #[test]
    fn blocks_cover_all_layers() {
        for t in 0..200 {
            let b = default_block_size(t);
            let k = block_count(t, b);
            assert!(k * b >= t, "t={t} b={b} k={k}");
            if k > 0 {
                assert!((k - 1) * b < t, "one block too many at t={t}");
            }
        }
    }
}
