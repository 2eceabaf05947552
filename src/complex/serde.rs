// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

use crate::Complex;
use serde::de::{
    Deserialize, Deserializer, Error as DeError, MapAccess, SeqAccess, Visitor,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt::{Formatter, Result as FmtResult};

const FIELDS: &[&str] = &["cartesian", "value"];

impl Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cartesian = self.is_cartesian();
        let value = if cartesian {
            self.cartesian()
        } else {
            self.polar()
        };
        let mut state = serializer.serialize_struct("Complex", 2)?;
        state.serialize_field("cartesian", &cartesian)?;
        state.serialize_field("value", &value)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> Result<Complex, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (cartesian, value) =
            deserializer.deserialize_struct("Complex", FIELDS, ComplexVisitor)?;
        if cartesian {
            Ok(Complex::new(value.0, value.1))
        } else {
            Complex::from_polar(value.0, value.1).map_err(DeError::custom)
        }
    }
}

enum Field {
    Cartesian,
    Value,
}

struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("`cartesian` or `value`")
    }

    fn visit_str<E>(self, value: &str) -> Result<Field, E>
    where
        E: DeError,
    {
        match value {
            "cartesian" => Ok(Field::Cartesian),
            "value" => Ok(Field::Value),
            _ => Err(DeError::unknown_field(value, FIELDS)),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct ComplexVisitor;

impl<'de> Visitor<'de> for ComplexVisitor {
    type Value = (bool, (f64, f64));

    fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("Complex")
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<(bool, (f64, f64)), V::Error>
    where
        V: SeqAccess<'de>,
    {
        let cartesian = seq
            .next_element()?
            .ok_or_else(|| DeError::invalid_length(0, &self))?;
        let value = seq
            .next_element()?
            .ok_or_else(|| DeError::invalid_length(1, &self))?;
        Ok((cartesian, value))
    }

    fn visit_map<V>(self, mut map: V) -> Result<(bool, (f64, f64)), V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut cartesian = None;
        let mut value = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Cartesian => {
                    if cartesian.is_some() {
                        return Err(DeError::duplicate_field("cartesian"));
                    }
                    cartesian = Some(map.next_value()?);
                }
                Field::Value => {
                    if value.is_some() {
                        return Err(DeError::duplicate_field("value"));
                    }
                    value = Some(map.next_value()?);
                }
            }
        }
        let cartesian =
            cartesian.ok_or_else(|| DeError::missing_field("cartesian"))?;
        let value = value.ok_or_else(|| DeError::missing_field("value"))?;
        Ok((cartesian, value))
    }
}

#[cfg(test)]
mod tests {
    use crate::Complex;
    use serde_json::json;
    use serde_test::{self, Token};

    fn tokens(cartesian: bool, value: (f64, f64)) -> [Token; 9] {
        [
            Token::Struct {
                name: "Complex",
                len: 2,
            },
            Token::Str("cartesian"),
            Token::Bool(cartesian),
            Token::Str("value"),
            Token::Tuple { len: 2 },
            Token::F64(value.0),
            Token::F64(value.1),
            Token::TupleEnd,
            Token::StructEnd,
        ]
    }

    fn assert_same(a: &Complex, b: &Complex) {
        assert_eq!(a.is_cartesian(), b.is_cartesian());
        assert_eq!(a.cartesian(), b.cartesian());
        assert_eq!(a.polar(), b.polar());
    }

    #[test]
    fn check_tokens() {
        let c = Complex::new(3.0, 4.0);
        serde_test::assert_tokens(&c, &tokens(true, (3.0, 4.0)));

        let p = Complex::from_polar(2.0, 0.5).unwrap();
        serde_test::assert_tokens(&p, &tokens(false, (2.0, 0.5)));
    }

    #[test]
    fn check_negative_norm() {
        serde_test::assert_de_tokens_error::<Complex>(
            &tokens(false, (-1.0, 0.5)),
            "norm -1.0 is negative, a complex number's norm cannot be negative",
        );
        // the driving pair of a cartesian number may be anything
        let c: Complex = serde_json::from_value(json!({
            "cartesian": true,
            "value": [-1.0, 0.5],
        }))
        .unwrap();
        assert_eq!(c.cartesian(), (-1.0, 0.5));
    }

    #[test]
    fn check_json() {
        let c = Complex::new(3.0, 4.0);
        let encoded = serde_json::to_string(&c).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value, json!({ "cartesian": true, "value": [3.0, 4.0] }));
        let decoded: Complex = serde_json::from_str(&encoded).unwrap();
        assert_same(&c, &decoded);

        let p = Complex::from_polar(2.0, -1.25).unwrap();
        let decoded: Complex =
            serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_same(&p, &decoded);

        let missing = serde_json::from_value::<Complex>(json!({ "cartesian": true }));
        assert!(missing.is_err());
    }

    #[test]
    fn check_bincode() {
        let c = Complex::new(3.0, 4.0);
        let encoded = bincode::serialize(&c).unwrap();
        let expected: &[u8] = &[
            1, 0, 0, 0, 0, 0, 0, 8, 64, 0, 0, 0, 0, 0, 0, 16, 64,
        ];
        assert_eq!(encoded, expected);
        let decoded: Complex = bincode::deserialize(&encoded).unwrap();
        assert_same(&c, &decoded);

        let p = Complex::from_polar(1.0, 3.0).unwrap();
        let decoded: Complex =
            bincode::deserialize(&bincode::serialize(&p).unwrap()).unwrap();
        assert_same(&p, &decoded);
    }
}
