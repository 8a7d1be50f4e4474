//! Pre-flight walk that rejects floats JSON cannot represent.
//!
//! `serde_json` writes NaN and infinities as `null`. Walking the value once
//! with [`FiniteCheck`] before rendering turns those into errors instead.

use serde::Serialize;
use serde::ser::{
    self, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
    SerializeTupleStruct, SerializeTupleVariant,
};

/// Reason a value failed the walk.
#[derive(Debug, derive_more::Display)]
#[display("{}", _0)]
pub(crate) struct CheckError(String);

impl std::error::Error for CheckError {}

impl ser::Error for CheckError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

/// Verify every float reachable from `value` is finite.
pub(crate) fn check_finite<T>(value: &T) -> Result<(), CheckError>
where
    T: Serialize + ?Sized,
{
    value.serialize(FiniteCheck)
}

fn check_float(value: f64) -> Result<(), CheckError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CheckError(format!(
            "non-finite float {} has no JSON representation",
            value
        )))
    }
}

/// Serializer that produces nothing and fails on non-finite floats.
struct FiniteCheck;

impl ser::Serializer for FiniteCheck {
    type Ok = ();
    type Error = CheckError;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _v: bool) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<(), CheckError> {
        check_float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<(), CheckError> {
        check_float(v)
    }

    fn serialize_char(self, _v: char) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<(), CheckError> {
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, CheckError> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, CheckError> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self, CheckError> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, CheckError> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, CheckError> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self, CheckError> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, CheckError> {
        Ok(self)
    }
}

impl SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = CheckError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = CheckError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = CheckError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = CheckError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = CheckError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        key.serialize(FiniteCheck)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = CheckError;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}

impl SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = CheckError;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<(), CheckError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Result<(), CheckError> {
        Ok(())
    }
}
