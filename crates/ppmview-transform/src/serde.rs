/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ::serde::ser::SerializeStruct;
use ::serde::{Serialize, Serializer};

use crate::state::TransformValues;

impl Serialize for TransformValues {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("TransformValues", 4)?;

        state.serialize_field("scale", &[self.scale.x, self.scale.y])?;
        state.serialize_field("shear", &[self.shear.x, self.shear.y])?;
        state.serialize_field("translation", &[self.translation.x, self.translation.y])?;
        state.serialize_field("rotation", &self.rotation)?;

        state.end()
    }
}
