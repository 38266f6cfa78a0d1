//! Shared numerical helpers for the optimization algorithms.

use numr::dtype::DType;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::optimize::error::{OptimizeError, OptimizeResult};

/// Square root of the IEEE-754 double precision machine epsilon.
pub const SQRT_EPS: f64 = 1.490_116_119_384_765_6e-8;

/// Golden section fraction `(3 - sqrt(5)) / 2`.
pub const GOLDEN_MEAN: f64 = 0.381_966_011_250_105_1;

/// Sign of `v`, with zero mapped to `+1`.
#[inline]
pub fn sign_or_one(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Extract an f64 bound from a 0-D or 1-element tensor.
///
/// A tensor holding more than one element is rejected with
/// [`OptimizeError::InvalidInput`]; dtypes other than F32/F64 surface as a
/// numr error.
pub fn scalar_from_tensor<R: Runtime>(t: &Tensor<R>, context: &str) -> OptimizeResult<f64> {
    if t.numel() != 1 {
        return Err(OptimizeError::InvalidInput {
            context: format!(
                "{}: bounds must be scalars or array scalars, got {} elements",
                context,
                t.numel()
            ),
        });
    }

    let t = t.contiguous();
    match t.dtype() {
        DType::F32 => {
            let data: Vec<f32> = t.to_vec();
            Ok(data[0] as f64)
        }
        DType::F64 => {
            let data: Vec<f64> = t.to_vec();
            Ok(data[0])
        }
        dtype => Err(numr::error::Error::UnsupportedDType {
            dtype,
            op: "scalar_from_tensor",
        }
        .into()),
    }
}
