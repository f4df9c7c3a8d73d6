//! Operations over one or two `CoordinateSequence`s that may have different
//! storage and ordinate layouts.

use super::CoordinateSequence;
use crate::Coordinate;

/// Copy `length` coordinates from `src` (starting at `src_pos`) into `dest`
/// (starting at `dest_pos`).
///
/// Only the ordinates both sequences hold are copied; the rest of `dest` is left
/// untouched.  Two packed sequences with the same layout are copied in bulk.
pub fn copy(
    src: &dyn CoordinateSequence,
    src_pos: usize,
    dest: &mut dyn CoordinateSequence,
    dest_pos: usize,
    length: usize,
) {
    if length == 0 {
        return;
    }
    if let (Some(src_packed), Some(dest_packed)) = (src.as_packed(), dest.as_packed_mut()) {
        if src_packed.layout() == dest_packed.layout() {
            let dim = src_packed.dimension();
            let from = &src_packed.raw()[src_pos * dim..(src_pos + length) * dim];
            dest_packed.raw_mut()[dest_pos * dim..(dest_pos + length) * dim].copy_from_slice(from);
            return;
        }
    }

    let common = src.ordinates() & dest.ordinates();
    let slots: Vec<(usize, usize)> = common
        .iter()
        .filter_map(|ordinate| {
            Some((
                src.try_resolve_ordinate(ordinate)?,
                dest.try_resolve_ordinate(ordinate)?,
            ))
        })
        .collect();

    for i in 0..length {
        for &(src_slot, dest_slot) in &slots {
            let value = src.get_ordinate(src_pos + i, src_slot);
            dest.set_ordinate(dest_pos + i, dest_slot, value);
        }
    }
}

/// Copy the coordinate at `src_index` of `src` into `dest` at `dest_index`.
pub fn copy_coord(
    src: &dyn CoordinateSequence,
    src_index: usize,
    dest: &mut dyn CoordinateSequence,
    dest_index: usize,
) {
    copy(src, src_index, dest, dest_index, 1);
}

/// Swap two coordinates in place.
pub fn swap(seq: &mut dyn CoordinateSequence, i: usize, j: usize) {
    if i == j {
        return;
    }
    for k in 0..seq.dimension() {
        let tmp = seq.get_ordinate(i, k);
        let other = seq.get_ordinate(j, k);
        seq.set_ordinate(i, k, other);
        seq.set_ordinate(j, k, tmp);
    }
}

/// Reverse the sequence in place.
pub fn reverse(seq: &mut dyn CoordinateSequence) {
    let len = seq.len();
    if len < 2 {
        return;
    }
    let last = len - 1;
    for i in 0..len / 2 {
        swap(seq, i, last - i);
    }
}

/// A ring is empty, or has more than 3 coordinates with the first and last
/// equal in X and Y.
pub fn is_ring(seq: &dyn CoordinateSequence) -> bool {
    let len = seq.len();
    if len == 0 {
        return true;
    }
    if len <= 3 {
        return false;
    }
    seq.get_xy(0) == seq.get_xy(len - 1)
}

/// Rotate the sequence so that `first_index` becomes position 0.
///
/// With `ensure_ring`, the sequence is treated as a closed ring: the final
/// (closing) position is excluded from the rotation and afterwards set to the
/// new first coordinate.
pub fn scroll(seq: &mut dyn CoordinateSequence, first_index: usize, ensure_ring: bool) {
    let len = seq.len();
    if first_index == 0 || len < 2 {
        return;
    }
    let dim = seq.dimension();
    let mut snapshot = Vec::with_capacity(len * dim);
    for i in 0..len {
        for k in 0..dim {
            snapshot.push(seq.get_ordinate(i, k));
        }
    }

    let last = if ensure_ring { len - 1 } else { len };
    for j in 0..last {
        let source = (first_index + j) % last;
        for k in 0..dim {
            seq.set_ordinate(j, k, snapshot[source * dim + k]);
        }
    }

    if ensure_ring {
        for k in 0..dim {
            let value = seq.get_ordinate(0, k);
            seq.set_ordinate(last, k, value);
        }
    }
}

/// Compare two sequences ordinate by ordinate over their common dimension.
/// NaN ordinates compare equal to each other.
pub fn is_equal(a: &dyn CoordinateSequence, b: &dyn CoordinateSequence) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let dim = a.dimension().min(b.dimension());
    for i in 0..a.len() {
        for k in 0..dim {
            let (va, vb) = (a.get_ordinate(i, k), b.get_ordinate(i, k));
            if va != vb && !(va.is_nan() && vb.is_nan()) {
                return false;
            }
        }
    }
    true
}

/// Position of the first coordinate equal to `coord` in X and Y.
pub fn index_of(coord: &Coordinate, seq: &dyn CoordinateSequence) -> Option<usize> {
    (0..seq.len()).find(|&i| seq.get_xy(i) == coord.xy())
}

/// Position of the smallest coordinate (by X, then Y) in `from..=to`.
pub fn min_coordinate_index(seq: &dyn CoordinateSequence, from: usize, to: usize) -> Option<usize> {
    let mut min_index: Option<usize> = None;
    let mut min_coord: Option<Coordinate> = None;
    for i in from..=to.min(seq.len().checked_sub(1)?) {
        let coord = seq.get_coordinate(i);
        if min_coord.map_or(true, |m| coord < m) {
            min_index = Some(i);
            min_coord = Some(coord);
        }
    }
    min_index
}

/// Text form `(x y [z ...], x y [z ...])`, every stored ordinate included.
pub fn to_text(seq: &dyn CoordinateSequence) -> String {
    let dim = seq.dimension();
    let coords: Vec<String> = (0..seq.len())
        .map(|i| {
            let ordinates: Vec<String> = (0..dim)
                .map(|k| seq.get_ordinate(i, k).to_string())
                .collect();
            ordinates.join(" ")
        })
        .collect();
    format!("({})", coords.join(", "))
}
