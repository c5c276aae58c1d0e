use serde::{Deserialize, Serialize};

use crate::grammar::{
    keywords::KeywordSet,
    visit::{Dispatch, Visit},
};

/// The graphical mark of a chart, one struct per kind.
///
/// The structs share no common interface; operations that apply to several
/// kinds go through a [`MarkVisitor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    /// Pie and donut slices.
    Arc(ArcMark),
    /// Filled area.
    Area(AreaMark),
    /// Rectangular bars.
    Bar(BarMark),
    /// Filled circles.
    Circle(CircleMark),
    /// Connected line.
    Line(LineMark),
    /// Point symbols.
    Point(PointMark),
    /// Arbitrary rectangles.
    Rect(RectMark),
    /// Line segments.
    Rule(RuleMark),
    /// Filled squares.
    Square(SquareMark),
    /// Short tick lines.
    Tick(TickMark),
    /// Line with variable width.
    Trail(TrailMark),
}

/// Arc mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

/// Area mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Bar mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

/// Circle mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircleMark {
    /// Fill or stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the circle is filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
}

/// Line mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineMark {
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Point mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointMark {
    /// Fill or stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the symbol is filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
}

/// Rect mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

/// Rule mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleMark {
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Square mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquareMark {
    /// Fill or stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the square is filled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
}

/// Tick mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Trail mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailMark {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Selector for the kind of [`Mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// [`ArcMark`].
    Arc,
    /// [`AreaMark`].
    Area,
    /// [`BarMark`].
    Bar,
    /// [`CircleMark`].
    Circle,
    /// [`LineMark`].
    Line,
    /// [`PointMark`].
    Point,
    /// [`RectMark`].
    Rect,
    /// [`RuleMark`].
    Rule,
    /// [`SquareMark`].
    Square,
    /// [`TickMark`].
    Tick,
    /// [`TrailMark`].
    Trail,
}

impl KeywordSet for MarkKind {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("ARC", MarkKind::Arc),
        ("AREA", MarkKind::Area),
        ("BAR", MarkKind::Bar),
        ("CIRCLE", MarkKind::Circle),
        ("LINE", MarkKind::Line),
        ("POINT", MarkKind::Point),
        ("RECT", MarkKind::Rect),
        ("RULE", MarkKind::Rule),
        ("SQUARE", MarkKind::Square),
        ("TICK", MarkKind::Tick),
        ("TRAIL", MarkKind::Trail),
    ];
}

impl MarkKind {
    /// A mark of this kind with every attribute unset.
    pub fn new_mark(self) -> Mark {
        match self {
            MarkKind::Arc => Mark::Arc(ArcMark::default()),
            MarkKind::Area => Mark::Area(AreaMark::default()),
            MarkKind::Bar => Mark::Bar(BarMark::default()),
            MarkKind::Circle => Mark::Circle(CircleMark::default()),
            MarkKind::Line => Mark::Line(LineMark::default()),
            MarkKind::Point => Mark::Point(PointMark::default()),
            MarkKind::Rect => Mark::Rect(RectMark::default()),
            MarkKind::Rule => Mark::Rule(RuleMark::default()),
            MarkKind::Square => Mark::Square(SquareMark::default()),
            MarkKind::Tick => Mark::Tick(TickMark::default()),
            MarkKind::Trail => Mark::Trail(TrailMark::default()),
        }
    }

    /// Lower-case name, as used in the serialized chart.
    pub fn name(self) -> &'static str {
        match self {
            MarkKind::Arc => "arc",
            MarkKind::Area => "area",
            MarkKind::Bar => "bar",
            MarkKind::Circle => "circle",
            MarkKind::Line => "line",
            MarkKind::Point => "point",
            MarkKind::Rect => "rect",
            MarkKind::Rule => "rule",
            MarkKind::Square => "square",
            MarkKind::Tick => "tick",
            MarkKind::Trail => "trail",
        }
    }
}

impl Mark {
    /// Kind of the held shape.
    pub fn kind(&self) -> MarkKind {
        match self {
            Mark::Arc(_) => MarkKind::Arc,
            Mark::Area(_) => MarkKind::Area,
            Mark::Bar(_) => MarkKind::Bar,
            Mark::Circle(_) => MarkKind::Circle,
            Mark::Line(_) => MarkKind::Line,
            Mark::Point(_) => MarkKind::Point,
            Mark::Rect(_) => MarkKind::Rect,
            Mark::Rule(_) => MarkKind::Rule,
            Mark::Square(_) => MarkKind::Square,
            Mark::Tick(_) => MarkKind::Tick,
            Mark::Trail(_) => MarkKind::Trail,
        }
    }
}

/// Per-shape handlers for an operation on a [`Mark`].
///
/// Every method defaults to [`Visit::Unhandled`]; implement only the shapes
/// the operation applies to.
#[allow(unused_variables)]
pub trait MarkVisitor {
    /// Handle an arc.
    fn visit_arc(&mut self, mark: &mut ArcMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle an area.
    fn visit_area(&mut self, mark: &mut AreaMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a bar.
    fn visit_bar(&mut self, mark: &mut BarMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a circle.
    fn visit_circle(&mut self, mark: &mut CircleMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a line.
    fn visit_line(&mut self, mark: &mut LineMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a point.
    fn visit_point(&mut self, mark: &mut PointMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a rect.
    fn visit_rect(&mut self, mark: &mut RectMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a rule.
    fn visit_rule(&mut self, mark: &mut RuleMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a square.
    fn visit_square(&mut self, mark: &mut SquareMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a tick.
    fn visit_tick(&mut self, mark: &mut TickMark) -> Visit {
        Visit::Unhandled
    }
    /// Handle a trail.
    fn visit_trail(&mut self, mark: &mut TrailMark) -> Visit {
        Visit::Unhandled
    }
}

impl Dispatch for Mark {
    type Visitor = dyn MarkVisitor;

    fn shape_name(&self) -> &'static str {
        self.kind().name()
    }

    fn accept(&mut self, visitor: &mut Self::Visitor) -> Visit {
        match self {
            Mark::Arc(m) => visitor.visit_arc(m),
            Mark::Area(m) => visitor.visit_area(m),
            Mark::Bar(m) => visitor.visit_bar(m),
            Mark::Circle(m) => visitor.visit_circle(m),
            Mark::Line(m) => visitor.visit_line(m),
            Mark::Point(m) => visitor.visit_point(m),
            Mark::Rect(m) => visitor.visit_rect(m),
            Mark::Rule(m) => visitor.visit_rule(m),
            Mark::Square(m) => visitor.visit_square(m),
            Mark::Tick(m) => visitor.visit_tick(m),
            Mark::Trail(m) => visitor.visit_trail(m),
        }
    }
}
