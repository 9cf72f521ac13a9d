#[inline]
pub fn sum_f32_f64(values: &[f32]) -> f64 {
    backend::sum_f32_f64(values)
}

/// Sum of per-angle similarity scores, `100 - |(| |r| - c | / 180) * 100|`,
/// over the common prefix of `reference` and `candidate`.
///
/// Lanes are folded into the f64 accumulator in index order, so every
/// backend returns the same bits.
#[inline]
pub fn similarity_sum(reference: &[f32], candidate: &[f32]) -> f64 {
    let n = reference.len().min(candidate.len());
    backend::similarity_sum(&reference[..n], &candidate[..n])
}

#[inline]
pub fn angle_similarity(reference: f32, candidate: f32) -> f32 {
    scalar::angle_similarity(reference, candidate)
}

#[inline]
pub fn backend_name() -> &'static str {
    backend::backend_name()
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod backend {
    pub use crate::simd::avx2::*;
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod backend {
    pub use crate::simd::neon::*;
}

#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "avx2"),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
mod backend {
    pub use crate::simd::scalar::*;
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub mod avx2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub mod neon;
pub mod scalar;

#[cfg(test)]
#[path = "../../tests/src_inline/simd/mod.rs"]
mod tests;
