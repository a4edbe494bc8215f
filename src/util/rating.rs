use crate::wdl::WDL;

/// The Elo difference implied by a match result, the WDL doesn't have to be normalized.
/// Returns `+inf` or `-inf` for a perfect score in either direction.
pub fn elo_from_wdl(wdl: WDL<f64>) -> f64 {
    let score = (wdl.value() / wdl.sum() + 1.0) / 2.0;
    let elo = -400.0 * (1.0 / score - 1.0).log10();

    // fix annoying negative zero case
    elo + 0.0
}
