//! Cluster index to color mapping
//!
//! A [`Palette`] is resolved once per run into a [`ColorMapper`], an ordinal scale whose domain
//! is the cluster indices `0..k` in order: index `i` gets the `i`-th palette color, and indices
//! past the end of the palette wrap around.
use std::fmt;
use std::sync::Arc;

use clusterviz::{Record, Value, CLUSTER_FIELD};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// A CSS color, as accepted by the chart views
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new<S: Into<String>>(color: S) -> Self {
        Color(color.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(color: &str) -> Self {
        Color::new(color)
    }
}

impl From<String> for Color {
    fn from(color: String) -> Self {
        Color(color)
    }
}

/// Per-point color function handed to the coloring views
pub type PointColorFn = Arc<dyn Fn(&Record) -> Option<Color> + Send + Sync>;

/// The standard categorical color schemes
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedScheme {
    Category10,
    Accent,
    Dark2,
    Paired,
    Pastel1,
    Pastel2,
    Set1,
    Set2,
    Set3,
    Tableau10,
}

impl Default for NamedScheme {
    fn default() -> Self {
        NamedScheme::Category10
    }
}

impl NamedScheme {
    /// Colors of the scheme, in scale order
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            NamedScheme::Category10 => &[
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#7f7f7f", "#bcbd22", "#17becf",
            ],
            NamedScheme::Accent => &[
                "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17",
                "#666666",
            ],
            NamedScheme::Dark2 => &[
                "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d",
                "#666666",
            ],
            NamedScheme::Paired => &[
                "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f",
                "#ff7f00", "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
            ],
            NamedScheme::Pastel1 => &[
                "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd",
                "#fddaec", "#f2f2f2",
            ],
            NamedScheme::Pastel2 => &[
                "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc",
                "#cccccc",
            ],
            NamedScheme::Set1 => &[
                "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628",
                "#f781bf", "#999999",
            ],
            NamedScheme::Set2 => &[
                "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494",
                "#b3b3b3",
            ],
            NamedScheme::Set3 => &[
                "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69",
                "#fccde5", "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
            ],
            NamedScheme::Tableau10 => &[
                "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1",
                "#ff9da7", "#9c755f", "#bab0ab",
            ],
        }
    }
}

/// A categorical palette: either one of the standard schemes or a caller supplied list
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Palette {
    NamedScheme(NamedScheme),
    CustomPalette(Vec<Color>),
}

impl Default for Palette {
    fn default() -> Self {
        Palette::NamedScheme(NamedScheme::default())
    }
}

impl From<NamedScheme> for Palette {
    fn from(scheme: NamedScheme) -> Self {
        Palette::NamedScheme(scheme)
    }
}

impl Palette {
    /// A custom palette from anything convertible to colors
    pub fn custom<I, C>(colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Color>,
    {
        Palette::CustomPalette(colors.into_iter().map(Into::into).collect())
    }

    /// Fails for a custom palette without colors
    pub fn check(&self) -> Result<()> {
        match self {
            Palette::CustomPalette(colors) if colors.is_empty() => Err(SyncError::InvalidParams(
                "custom palette has no colors".into(),
            )),
            _ => Ok(()),
        }
    }

    /// Resolves the palette into an index to color mapping
    pub fn resolve(&self) -> Result<ColorMapper> {
        self.check()?;
        let colors: Vec<Color> = match self {
            Palette::NamedScheme(scheme) => scheme.colors().iter().map(|&c| c.into()).collect(),
            Palette::CustomPalette(colors) => colors.clone(),
        };
        Ok(ColorMapper {
            colors: colors.into(),
        })
    }
}

/// Ordinal scale from cluster indices to colors
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMapper {
    colors: Arc<[Color]>,
}

impl ColorMapper {
    /// Color of a cluster index. Indices past the palette length wrap around.
    pub fn color(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    /// Color of a record, read from its `cluster` field
    ///
    /// Records without a readable cluster index have no color.
    pub fn color_of(&self, record: &Record) -> Option<Color> {
        cluster_index(record.get(CLUSTER_FIELD)?).map(|index| self.color(index).clone())
    }

    /// Packs the mapping into the function handed to the views
    pub fn point_color_fn(&self) -> PointColorFn {
        let mapper = self.clone();
        Arc::new(move |record: &Record| mapper.color_of(record))
    }

    /// Number of distinct colors before the scale wraps around
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn cluster_index(value: &Value) -> Option<usize> {
    match value {
        Value::Text(text) => text.trim().parse().ok(),
        Value::Number(n) if *n >= 0. && n.fract() == 0. => Some(*n as usize),
        _ => None,
    }
}
