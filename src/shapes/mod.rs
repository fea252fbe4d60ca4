// SPDX-License-Identifier: MIT OR Apache-2.0

//! Annotation geometry entities.
//!
//! Shape records follow the same validation pattern as the experimenter and
//! group entities: everything is optional on the wire, required geometry
//! fields fail construction, a wrong `@type` tag warns only. Geometry
//! semantics (rendering, hit-testing) belong to the viewer and are not
//! modelled here.

use serde::Deserialize;

mod ellipse;
mod rectangle;

pub use ellipse::{Ellipse, RawEllipse};
pub use rectangle::{RawRectangle, Rectangle};

/// Fields shared by every OMERO shape record, flattened into the individual
/// geometry records.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawShape {
    #[serde(rename = "@id")]
    pub id: Option<i64>,

    #[serde(rename = "@type")]
    pub type_tag: Option<String>,

    #[serde(rename = "Text")]
    pub text: Option<String>,

    /// Packed RGBA fill color.
    #[serde(rename = "FillColor")]
    pub fill_color: Option<i32>,

    /// Packed RGBA stroke color.
    #[serde(rename = "StrokeColor")]
    pub stroke_color: Option<i32>,

    #[serde(rename = "Locked")]
    pub locked: Option<bool>,

    /// Channel index the shape is attached to.
    #[serde(rename = "TheC")]
    pub channel: Option<i32>,

    /// Z-slice index the shape is attached to.
    #[serde(rename = "TheZ")]
    pub z: Option<i32>,

    /// Timepoint index the shape is attached to.
    #[serde(rename = "TheT")]
    pub t: Option<i32>,
}
