//! Random matrices for demos and tests.
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::config::FillConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::{SquareMatrix, MAX_SIZE};

/// Fill a `size` x `size` matrix with values drawn from `[config.min, config.max)`.
pub fn random_fill(size: usize, config: &FillConfig) -> Result<SquareMatrix> {
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            random_fill_with(size, config.min, config.max, &mut rng)
        }
        None => random_fill_with(size, config.min, config.max, &mut thread_rng()),
    }
}

/// Same as [`random_fill`] with a caller-supplied generator.
pub fn random_fill_with<R: Rng>(
    size: usize,
    min: i32,
    max: i32,
    rng: &mut R,
) -> Result<SquareMatrix> {
    if size == 0 || size > MAX_SIZE {
        return Err(MatrixError::SizeLimit {
            size,
            max: MAX_SIZE,
        });
    }
    if min >= max {
        return Err(MatrixError::InvalidRange { min, max });
    }
    let data: Vec<i32> = (0..size * size).map(|_| rng.gen_range(min..max)).collect();
    log::trace!("random {}x{} matrix: {:?}", size, size, data);
    SquareMatrix::from_shape_vec(size, data)
}
