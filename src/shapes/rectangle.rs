// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

use crate::raw::{EntityError, SchemaMismatch, Strictness, Validate, require};
use crate::shapes::RawShape;

/// An OMERO rectangle annotation as sent by the server.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRectangle {
    #[serde(flatten)]
    pub shape: RawShape,

    /// X coordinate of the top-left corner. Required.
    #[serde(rename = "X")]
    pub x: Option<f64>,

    /// Y coordinate of the top-left corner. Required.
    #[serde(rename = "Y")]
    pub y: Option<f64>,

    #[serde(rename = "Width")]
    pub width: Option<f64>,

    #[serde(rename = "Height")]
    pub height: Option<f64>,
}

impl RawRectangle {
    /// Schema URI of a rectangle record.
    pub const TYPE: &'static str = "http://www.openmicroscopy.org/Schemas/OME/2016-06#Rectangle";

    const ENTITY: &'static str = "rectangle";

    /// Report a type tag which is present but not the rectangle schema.
    pub fn schema_mismatch(&self) -> Option<SchemaMismatch> {
        SchemaMismatch::check(Self::ENTITY, Self::TYPE, self.shape.type_tag.as_deref())
    }
}

impl Validate for RawRectangle {
    fn validate(&self, strictness: Strictness) -> Result<(), EntityError> {
        if strictness == Strictness::Strict {
            require(&self.shape.id, Self::ENTITY, "@id")?;
            require(&self.x, Self::ENTITY, "X")?;
            require(&self.y, Self::ENTITY, "Y")?;
            require(&self.width, Self::ENTITY, "Width")?;
            require(&self.height, Self::ENTITY, "Height")?;
        }

        Ok(())
    }
}

/// A validated rectangle annotation.
#[derive(Clone, Debug)]
pub struct Rectangle {
    id: i64,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    text: String,
    fill_color: Option<i32>,
    stroke_color: Option<i32>,
    locked: bool,
    channel: Option<i32>,
    z: Option<i32>,
    t: Option<i32>,
}

impl Rectangle {
    /// Build a rectangle from a raw record.
    ///
    /// Fails when the ID or any geometry field is absent. A type tag which
    /// does not match the rectangle schema is logged and tolerated.
    pub fn from_raw(raw: &RawRectangle) -> Result<Self, EntityError> {
        raw.validate(Strictness::Strict)?;

        if let Some(mismatch) = raw.schema_mismatch() {
            mismatch.warn();
        }

        // validate(Strict) guarantees the required fields below.
        Ok(Self {
            id: raw.shape.id.unwrap_or_default(),
            x: raw.x.unwrap_or_default(),
            y: raw.y.unwrap_or_default(),
            width: raw.width.unwrap_or_default(),
            height: raw.height.unwrap_or_default(),
            text: raw.shape.text.clone().unwrap_or_default(),
            fill_color: raw.shape.fill_color,
            stroke_color: raw.shape.stroke_color,
            locked: raw.shape.locked.unwrap_or_default(),
            channel: raw.shape.channel,
            z: raw.shape.z,
            t: raw.shape.t,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fill_color(&self) -> Option<i32> {
        self.fill_color
    }

    pub fn stroke_color(&self) -> Option<i32> {
        self.stroke_color
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn channel(&self) -> Option<i32> {
        self.channel
    }

    pub fn z(&self) -> Option<i32> {
        self.z
    }

    pub fn t(&self) -> Option<i32> {
        self.t
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Rectangle {}
