use crate::geometry::Component;
use crate::sequence::{CoordinateSequence, PackedSequence};
use crate::{Dimension, Envelope, Geometry, PrecisionModel};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRings {
    pub shell: PackedSequence,
    pub holes: Vec<PackedSequence>,
}

impl PolygonRings {
    pub fn new(shell: PackedSequence, holes: Vec<PackedSequence>) -> Self {
        PolygonRings { shell, holes }
    }

    fn component(&self) -> Option<Component<'_>> {
        if self.shell.is_empty() {
            return None;
        }
        Some(Component::Polygon {
            shell: &self.shell,
            holes: self
                .holes
                .iter()
                .filter(|h| !h.is_empty())
                .map(|h| h as &dyn CoordinateSequence)
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Empty,
    Point(PackedSequence),
    MultiPoint(Vec<PackedSequence>),
    LineString(PackedSequence),
    MultiLineString(Vec<PackedSequence>),
    Polygon(PolygonRings),
    MultiPolygon(Vec<PolygonRings>),
}

/// A simple geometry over packed coordinate sequences.
///
/// The envelope is computed on first use and cached.  Code that mutates the
/// coordinates in place must call [`Shape::geometry_changed`] afterwards, or go
/// through [`Shape::apply`], which does so.
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    envelope: OnceLock<Envelope>,
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Shape::new(kind)
    }
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Shape {
            kind,
            envelope: OnceLock::new(),
        }
    }

    pub fn empty() -> Self {
        Shape::new(ShapeKind::Empty)
    }

    pub fn point(x: f64, y: f64) -> Self {
        Shape::new(ShapeKind::Point(PackedSequence::from_xy(vec![(x, y)])))
    }

    pub fn line_string<IP: Into<(f64, f64)>>(points: Vec<IP>) -> Self {
        Shape::new(ShapeKind::LineString(PackedSequence::from_xy(points)))
    }

    /// A polygon without holes.
    pub fn polygon<IP: Into<(f64, f64)>>(shell: Vec<IP>) -> Self {
        let rings = PolygonRings::new(PackedSequence::from_xy(shell), Vec::new());
        Shape::new(ShapeKind::Polygon(rings))
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn into_kind(self) -> ShapeKind {
        self.kind
    }

    /// Every coordinate sequence, rings included, in order.
    pub fn sequences(&self) -> Vec<&PackedSequence> {
        match &self.kind {
            ShapeKind::Empty => vec![],
            ShapeKind::Point(seq) | ShapeKind::LineString(seq) => vec![seq],
            ShapeKind::MultiPoint(seqs) | ShapeKind::MultiLineString(seqs) => {
                seqs.iter().collect()
            }
            ShapeKind::Polygon(rings) => std::iter::once(&rings.shell)
                .chain(rings.holes.iter())
                .collect(),
            ShapeKind::MultiPolygon(polys) => polys
                .iter()
                .flat_map(|rings| std::iter::once(&rings.shell).chain(rings.holes.iter()))
                .collect(),
        }
    }

    fn sequences_mut(&mut self) -> Vec<&mut PackedSequence> {
        match &mut self.kind {
            ShapeKind::Empty => vec![],
            ShapeKind::Point(seq) | ShapeKind::LineString(seq) => vec![seq],
            ShapeKind::MultiPoint(seqs) | ShapeKind::MultiLineString(seqs) => {
                seqs.iter_mut().collect()
            }
            ShapeKind::Polygon(rings) => std::iter::once(&mut rings.shell)
                .chain(rings.holes.iter_mut())
                .collect(),
            ShapeKind::MultiPolygon(polys) => polys
                .iter_mut()
                .flat_map(|rings| std::iter::once(&mut rings.shell).chain(rings.holes.iter_mut()))
                .collect(),
        }
    }

    pub fn num_points(&self) -> usize {
        self.sequences().iter().map(|seq| seq.len()).sum()
    }

    /// Drop cached derived values after the coordinates changed.
    pub fn geometry_changed(&mut self) {
        self.envelope = OnceLock::new();
    }

    /// Run `f` over every coordinate sequence, then invalidate caches.
    pub fn apply<F: FnMut(&mut dyn CoordinateSequence)>(&mut self, mut f: F) {
        for seq in self.sequences_mut() {
            f(seq as &mut dyn CoordinateSequence);
        }
        self.geometry_changed();
    }

    /// Snap every coordinate to the grid of `precision`.
    pub fn make_precise(&mut self, precision: &PrecisionModel) {
        self.apply(|seq| precision.make_precise_sequence(seq));
    }

    fn compute_envelope(&self) -> Envelope {
        let mut env = Envelope::new_null();
        for seq in self.sequences() {
            seq.expand_envelope(&mut env);
        }
        env
    }
}

fn point_component(seq: &PackedSequence) -> Option<Component<'_>> {
    if seq.is_empty() {
        None
    } else {
        Some(Component::Point(seq))
    }
}

fn line_component(seq: &PackedSequence) -> Option<Component<'_>> {
    if seq.is_empty() {
        None
    } else {
        Some(Component::LineString(seq))
    }
}

fn sequence_length(seq: &dyn CoordinateSequence) -> f64 {
    (1..seq.len())
        .map(|i| {
            let d = seq.get_xy(i) - seq.get_xy(i - 1);
            d.x.hypot(d.y)
        })
        .sum()
}

impl Geometry for Shape {
    fn dimension(&self) -> Dimension {
        self.components()
            .iter()
            .map(Component::dimension)
            .max_by_key(|dim| dim.value())
            .unwrap_or(Dimension::False)
    }

    fn envelope(&self) -> Envelope {
        *self.envelope.get_or_init(|| self.compute_envelope())
    }

    fn is_empty(&self) -> bool {
        self.components().is_empty()
    }

    fn is_rectangle(&self) -> bool {
        let shell = match &self.kind {
            ShapeKind::Polygon(rings) if rings.holes.is_empty() => &rings.shell,
            _ => return false,
        };
        if shell.len() != 5 {
            return false;
        }
        let env = self.envelope();
        for i in 0..5 {
            let p = shell.get_xy(i);
            if !(p.x == env.min_x() || p.x == env.max_x()) {
                return false;
            }
            if !(p.y == env.min_y() || p.y == env.max_y()) {
                return false;
            }
        }
        // Consecutive vertices differ in exactly one ordinate.
        for i in 1..5 {
            let (prev, p) = (shell.get_xy(i - 1), shell.get_xy(i));
            if (p.x != prev.x) == (p.y != prev.y) {
                return false;
            }
        }
        true
    }

    fn length(&self) -> f64 {
        self.components()
            .iter()
            .flat_map(|c| c.linework())
            .map(sequence_length)
            .sum()
    }

    fn components(&self) -> Vec<Component<'_>> {
        match &self.kind {
            ShapeKind::Empty => vec![],
            ShapeKind::Point(seq) => point_component(seq).into_iter().collect(),
            ShapeKind::MultiPoint(seqs) => seqs.iter().filter_map(point_component).collect(),
            ShapeKind::LineString(seq) => line_component(seq).into_iter().collect(),
            ShapeKind::MultiLineString(seqs) => seqs.iter().filter_map(line_component).collect(),
            ShapeKind::Polygon(rings) => rings.component().into_iter().collect(),
            ShapeKind::MultiPolygon(polys) => {
                polys.iter().filter_map(PolygonRings::component).collect()
            }
        }
    }
}
