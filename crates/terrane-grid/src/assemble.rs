//! Turning cell codes back into polygons.

use crate::codec::CellCodec;
use crate::error::GridError;
use geo::{BooleanOps, MultiPolygon, Polygon};
use tracing::debug;

/// Polygon covering the single cell `code`.
pub fn cell_to_polygon<C>(codec: &C, code: &str) -> Result<Polygon<f64>, GridError>
where
    C: CellCodec + ?Sized,
{
    Ok(codec.decode(code)?.to_polygon())
}

/// Union of the polygons of every cell in `cells`.
///
/// Duplicate codes are harmless. An empty input yields an empty
/// `MultiPolygon`.
///
/// Codes are sorted first so that, for prefix-ordered grids such as
/// geohash, neighbouring cells tend to be merged early; the union is then
/// reduced pairwise, which keeps intermediate shapes small.
pub fn cells_to_polygon<C, I, S>(codec: &C, cells: I) -> Result<MultiPolygon<f64>, GridError>
where
    C: CellCodec + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut codes: Vec<String> = cells.into_iter().map(|c| c.as_ref().to_string()).collect();
    codes.sort_unstable();
    codes.dedup();

    let mut parts = codes
        .iter()
        .map(|code| cell_to_polygon(codec, code).map(|p| MultiPolygon::new(vec![p])))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(cells = parts.len(), "assembling cells");

    while parts.len() > 1 {
        let mut merged = Vec::with_capacity(parts.len().div_ceil(2));
        let mut iter = parts.into_iter();
        while let Some(a) = iter.next() {
            match iter.next() {
                Some(b) => merged.push(a.union(&b)),
                None => merged.push(a),
            }
        }
        parts = merged;
    }
    Ok(parts.pop().unwrap_or_else(|| MultiPolygon::new(Vec::new())))
}
