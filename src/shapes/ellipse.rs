// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

use crate::raw::{EntityError, SchemaMismatch, Strictness, Validate, require};
use crate::shapes::RawShape;

/// An OMERO ellipse annotation as sent by the server.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawEllipse {
    #[serde(flatten)]
    pub shape: RawShape,

    /// X coordinate of the center. Required.
    #[serde(rename = "X")]
    pub x: Option<f64>,

    /// Y coordinate of the center. Required.
    #[serde(rename = "Y")]
    pub y: Option<f64>,

    #[serde(rename = "RadiusX")]
    pub radius_x: Option<f64>,

    #[serde(rename = "RadiusY")]
    pub radius_y: Option<f64>,
}

impl RawEllipse {
    /// Schema URI of an ellipse record.
    pub const TYPE: &'static str = "http://www.openmicroscopy.org/Schemas/OME/2016-06#Ellipse";

    const ENTITY: &'static str = "ellipse";

    /// Report a type tag which is present but not the ellipse schema.
    pub fn schema_mismatch(&self) -> Option<SchemaMismatch> {
        SchemaMismatch::check(Self::ENTITY, Self::TYPE, self.shape.type_tag.as_deref())
    }
}

impl Validate for RawEllipse {
    fn validate(&self, strictness: Strictness) -> Result<(), EntityError> {
        if strictness == Strictness::Strict {
            require(&self.shape.id, Self::ENTITY, "@id")?;
            require(&self.x, Self::ENTITY, "X")?;
            require(&self.y, Self::ENTITY, "Y")?;
            require(&self.radius_x, Self::ENTITY, "RadiusX")?;
            require(&self.radius_y, Self::ENTITY, "RadiusY")?;
        }

        Ok(())
    }
}

/// A validated ellipse annotation.
#[derive(Clone, Debug)]
pub struct Ellipse {
    id: i64,
    x: f64,
    y: f64,
    radius_x: f64,
    radius_y: f64,
    text: String,
    fill_color: Option<i32>,
    stroke_color: Option<i32>,
    locked: bool,
    channel: Option<i32>,
    z: Option<i32>,
    t: Option<i32>,
}

impl Ellipse {
    /// Build an ellipse from a raw record.
    ///
    /// Fails when the ID or any geometry field is absent. A type tag which
    /// does not match the ellipse schema is logged and tolerated.
    pub fn from_raw(raw: &RawEllipse) -> Result<Self, EntityError> {
        raw.validate(Strictness::Strict)?;

        if let Some(mismatch) = raw.schema_mismatch() {
            mismatch.warn();
        }

        // validate(Strict) guarantees the required fields below.
        Ok(Self {
            id: raw.shape.id.unwrap_or_default(),
            x: raw.x.unwrap_or_default(),
            y: raw.y.unwrap_or_default(),
            radius_x: raw.radius_x.unwrap_or_default(),
            radius_y: raw.radius_y.unwrap_or_default(),
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

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
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

impl PartialEq for Ellipse {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ellipse {}

#[cfg(test)]
mod tests {
    use super::{Ellipse, RawEllipse};
    use crate::raw::EntityError;

    fn from_json(json: &str) -> RawEllipse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn complete_record_builds() {
        let raw = from_json(
            r#"{
                "@type": "http://www.openmicroscopy.org/Schemas/OME/2016-06#Ellipse",
                "@id": 713,
                "Text": "tumor",
                "FillColor": -256,
                "Locked": true,
                "TheC": 0,
                "TheZ": 2,
                "TheT": 1,
                "X": 50.0,
                "Y": 60.0,
                "RadiusX": 10.0,
                "RadiusY": 20.0
            }"#,
        );

        let ellipse = Ellipse::from_raw(&raw).unwrap();

        assert_eq!(ellipse.id(), 713);
        assert_eq!(ellipse.x(), 50.0);
        assert_eq!(ellipse.radius_y(), 20.0);
        assert_eq!(ellipse.text(), "tumor");
        assert_eq!(ellipse.fill_color(), Some(-256));
        assert!(ellipse.locked());
        assert_eq!(ellipse.z(), Some(2));
        assert_eq!(raw.schema_mismatch(), None);
    }

    #[test]
    fn missing_geometry_fails() {
        let raw = from_json(r#"{"@id": 713, "X": 50.0, "Y": 60.0, "RadiusY": 20.0}"#);

        assert!(matches!(
            Ellipse::from_raw(&raw),
            Err(EntityError::MissingField {
                entity: "ellipse",
                field: "RadiusX",
            })
        ));
    }

    #[test]
    fn missing_id_fails() {
        let raw = from_json(r#"{"X": 50.0, "Y": 60.0, "RadiusX": 10.0, "RadiusY": 20.0}"#);

        assert!(matches!(
            Ellipse::from_raw(&raw),
            Err(EntityError::MissingField {
                entity: "ellipse",
                field: "@id",
            })
        ));
    }

    #[test]
    fn unexpected_type_tag_is_tolerated() {
        let raw = from_json(
            r#"{"@id": 713, "@type": "rectangle?", "X": 50.0, "Y": 60.0, "RadiusX": 10.0, "RadiusY": 20.0}"#,
        );

        assert!(Ellipse::from_raw(&raw).is_ok());
        assert!(raw.schema_mismatch().is_some());
    }

    #[test]
    fn absent_optionals_normalize() {
        let raw = from_json(r#"{"@id": 713, "X": 0.0, "Y": 0.0, "RadiusX": 1.0, "RadiusY": 1.0}"#);

        let ellipse = Ellipse::from_raw(&raw).unwrap();

        assert_eq!(ellipse.text(), "");
        assert!(!ellipse.locked());
        assert_eq!(ellipse.channel(), None);
    }
}
