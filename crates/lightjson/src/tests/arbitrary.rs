use quickcheck::{Arbitrary, Gen};

use crate::{Array, Map, Value};

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct JsonNumber(pub(crate) f64);

impl Arbitrary for JsonNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }

        Self(value)
    }
}

fn gen_scalar(g: &mut Gen) -> Value {
    match usize::arbitrary(g) % 4 {
        0 => Value::Null,
        1 => Value::Boolean(bool::arbitrary(g)),
        2 => Value::Number(JsonNumber::arbitrary(g).0),
        _ => Value::String(String::arbitrary(g)),
    }
}

fn gen_val(g: &mut Gen, depth: usize) -> Value {
    if depth == 0 {
        return gen_scalar(g);
    }
    match usize::arbitrary(g) % 6 {
        0..=3 => gen_scalar(g),
        4 => {
            let len = usize::arbitrary(g) % 4;
            let mut arr = Array::with_capacity(len);
            for _ in 0..len {
                arr.push(gen_val(g, depth - 1));
            }
            Value::Array(arr)
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut map = Map::with_capacity(len);
            for _ in 0..len {
                map.insert(String::arbitrary(g), gen_val(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 4;
        gen_val(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Value::Null => quickcheck::empty_shrinker(),
            Value::Array(arr) => {
                let children = arr.clone();
                Box::new(
                    core::iter::once(Value::Null)
                        .chain(children.clone().into_iter())
                        .chain(children.shrink().map(Value::Array)),
                )
            }
            Value::Object(map) => {
                let values: Vec<Value> = map.values().cloned().collect();
                Box::new(core::iter::once(Value::Null).chain(values))
            }
            _ => quickcheck::single_shrinker(Value::Null),
        }
    }
}
