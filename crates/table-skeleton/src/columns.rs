use crate::size::Size;

/// Column layout for the skeleton body: either a bare count or an explicit,
/// order-preserving list of per-column specs.
#[derive(Debug, Clone, PartialEq)]
pub enum Columns {
    /// N columns with no explicit widths.
    Count(usize),
    /// One spec per column.
    Specs(Vec<ColumnSpec>),
}

/// A single column's width specification.
///
/// Mirrors the three shapes accepted at call sites: a bare pixel number, a
/// bare CSS string, or a record with an optional width.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSpec {
    /// Bare number — pixel width.
    Px(f64),
    /// Bare string — literal CSS length or percentage.
    Css(String),
    /// Record form; `None` means unspecified width.
    Width(Option<Size>),
}

/// A column reduced to its optional width — the uniform internal shape, one
/// per rendered cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedColumn {
    pub width: Option<Size>,
}

impl Columns {
    /// Normalize to the uniform per-column shape, preserving order.
    pub fn normalize(&self) -> Vec<NormalizedColumn> {
        match self {
            Columns::Count(n) => vec![NormalizedColumn::default(); *n],
            Columns::Specs(specs) => specs
                .iter()
                .map(|spec| NormalizedColumn {
                    width: spec.width(),
                })
                .collect(),
        }
    }
}

impl ColumnSpec {
    /// Record form with an explicit width.
    pub fn with_width(width: impl Into<Size>) -> Self {
        ColumnSpec::Width(Some(width.into()))
    }

    /// Record form with no width.
    pub fn auto() -> Self {
        ColumnSpec::Width(None)
    }

    fn width(&self) -> Option<Size> {
        match self {
            ColumnSpec::Px(n) => Some(Size::Px(*n)),
            ColumnSpec::Css(s) => Some(Size::Css(s.clone())),
            ColumnSpec::Width(width) => width.clone(),
        }
    }
}

impl NormalizedColumn {
    /// Resolve the CSS width for the cell at `index`, or `None` for the
    /// browser default.
    ///
    /// With `randomize`, unset and `auto` widths take a seeded percentage so
    /// the layout looks varied yet stays identical across renders. Explicit
    /// widths are never overridden: numbers render as pixels, non-empty
    /// strings pass through verbatim, and an empty string falls back to no
    /// width at all.
    pub fn resolve(&self, index: usize, randomize: bool) -> Option<String> {
        let auto = match &self.width {
            None => true,
            Some(Size::Css(s)) => s == "auto",
            Some(Size::Px(_)) => false,
        };
        if randomize && auto {
            return Some(format!("{}%", seeded_pct(index)));
        }
        match &self.width {
            Some(Size::Px(n)) => Some(format!("{n}px")),
            Some(Size::Css(s)) if s.is_empty() => None,
            Some(Size::Css(s)) => Some(s.clone()),
            None => None,
        }
    }
}

/// Deterministic percentage in `[60, 99]` for a column index.
///
/// Plain integer arithmetic with no entropy source: the same index always
/// maps to the same value.
fn seeded_pct(index: usize) -> usize {
    let x = (index * 9301 + 49297) % 233280;
    60 + x * 40 / 233280
}

impl From<usize> for Columns {
    fn from(count: usize) -> Self {
        Columns::Count(count)
    }
}

impl From<i32> for Columns {
    /// Negative counts clamp to an empty column list.
    fn from(count: i32) -> Self {
        Columns::Count(count.max(0) as usize)
    }
}

impl<T: Into<ColumnSpec>> From<Vec<T>> for Columns {
    fn from(specs: Vec<T>) -> Self {
        Columns::Specs(specs.into_iter().map(Into::into).collect())
    }
}

impl From<f64> for ColumnSpec {
    fn from(value: f64) -> Self {
        ColumnSpec::Px(value)
    }
}

impl From<i32> for ColumnSpec {
    fn from(value: i32) -> Self {
        ColumnSpec::Px(value.into())
    }
}

impl From<&str> for ColumnSpec {
    fn from(value: &str) -> Self {
        ColumnSpec::Css(value.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(value: String) -> Self {
        ColumnSpec::Css(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn count_yields_widthless_columns() {
        let cols = Columns::Count(3).normalize();
        assert_eq!(cols.len(), 3);
        assert!(cols.iter().all(|c| c.width.is_none()));
    }

    #[test]
    fn zero_and_negative_counts_yield_no_columns() {
        assert_eq!(Columns::Count(0).normalize().len(), 0);
        assert_eq!(Columns::from(-4).normalize().len(), 0);
    }

    #[test]
    fn specs_normalize_element_wise() {
        let cols = Columns::from(vec![
            ColumnSpec::from(100),
            ColumnSpec::from("40%"),
            ColumnSpec::with_width(Size::css("25%")),
            ColumnSpec::auto(),
        ])
        .normalize();
        assert_eq!(cols.len(), 4);
        assert_eq!(cols[0].width, Some(Size::Px(100.0)));
        assert_eq!(cols[1].width, Some(Size::Css("40%".into())));
        assert_eq!(cols[2].width, Some(Size::Css("25%".into())));
        assert_eq!(cols[3].width, None);
    }

    #[test]
    fn numeric_vec_converts_to_pixel_specs() {
        let widths: Vec<_> = Columns::from(vec![100, 200, 150])
            .normalize()
            .iter()
            .enumerate()
            .map(|(i, col)| col.resolve(i, false))
            .collect();
        assert_eq!(
            widths,
            vec![
                Some("100px".to_string()),
                Some("200px".to_string()),
                Some("150px".to_string()),
            ],
        );
    }

    #[test]
    fn resolve_follows_the_width_typing_rules() {
        let col = |width| NormalizedColumn { width };
        assert_eq!(
            col(Some(Size::Px(100.0))).resolve(0, false),
            Some("100px".to_string()),
        );
        assert_eq!(
            col(Some(Size::Px(0.0))).resolve(0, false),
            Some("0px".to_string()),
        );
        assert_eq!(
            col(Some(Size::Css("40%".into()))).resolve(0, false),
            Some("40%".to_string()),
        );
        assert_eq!(col(Some(Size::Css(String::new()))).resolve(0, false), None);
        assert_eq!(col(None).resolve(0, false), None);
        // Without randomize, `auto` is just another literal string.
        assert_eq!(
            col(Some(Size::Css("auto".into()))).resolve(0, false),
            Some("auto".to_string()),
        );
    }

    #[test]
    fn randomize_fills_unset_and_auto_widths() {
        let unset = NormalizedColumn::default();
        assert_eq!(unset.resolve(0, true), Some("68%".to_string()));
        assert_eq!(unset.resolve(1, true), Some("70%".to_string()));
        assert_eq!(unset.resolve(2, true), Some("71%".to_string()));

        let auto = NormalizedColumn {
            width: Some(Size::Css("auto".into())),
        };
        assert_eq!(auto.resolve(0, true), Some("68%".to_string()));
    }

    #[test]
    fn randomize_never_overrides_explicit_widths() {
        let fixed = NormalizedColumn {
            width: Some(Size::Px(120.0)),
        };
        assert_eq!(fixed.resolve(0, true), Some("120px".to_string()));

        let pct = NormalizedColumn {
            width: Some(Size::Css("40%".into())),
        };
        assert_eq!(pct.resolve(3, true), Some("40%".to_string()));
    }

    #[test]
    fn seeded_widths_are_stable_and_in_range() {
        for i in 0..200 {
            let pct = seeded_pct(i);
            assert_eq!(pct, seeded_pct(i));
            assert!((60..=99).contains(&pct), "index {i} gave {pct}");
        }
    }
}
